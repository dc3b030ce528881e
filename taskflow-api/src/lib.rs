//! # TaskFlow API Server Library
//!
//! REST API for personal task management: signup/login, the caller's
//! profile, and per-account task CRUD behind bearer-token auth.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: JSON extractor with API-shaped rejections
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
