/// API route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: signup and login
/// - `profile`: the caller's own account
/// - `tasks`: per-account task CRUD

pub mod auth;
pub mod health;
pub mod profile;
pub mod tasks;
