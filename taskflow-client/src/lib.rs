//! # TaskFlow Client
//!
//! Rendering-agnostic client for the TaskFlow API. Pages are plain view
//! models: they hold a snapshot of server state, call the API, record
//! notices, and return the route to navigate to.
//!
//! ## Module Organization
//!
//! - `api`: HTTP calls with bearer token handling
//! - `config`: API URL and storage location
//! - `storage`: persistent key/value store holding the token and theme
//! - `pages`: login, signup and dashboard view models
//! - `task_form`: create/edit form with client-side validation
//! - `router`, `theme`, `notifications`: navigation, light/dark mode, toasts

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod notifications;
pub mod pages;
pub mod router;
pub mod storage;
pub mod task_form;
pub mod theme;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
