//! # TaskFlow Shared Library
//!
//! Domain types, persistence and business logic used by the TaskFlow API
//! server.
//!
//! ## Module Organization
//!
//! - `auth`: password hashing, bearer tokens, the auth guard, ownership checks
//! - `db`: connection pool and migrations
//! - `models`: database models and their SQL
//! - `store`: the persistence seam (Postgres and in-memory)
//! - `services`: account and task operations

pub mod auth;
pub mod db;
pub mod models;
pub mod services;
pub mod store;

/// Current version of the TaskFlow shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
