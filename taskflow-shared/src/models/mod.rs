/// Database models for TaskFlow
///
/// Each model owns its SQL. Callers normally go through the
/// [`crate::store`] traits instead of using these directly.
///
/// # Models
///
/// - `account`: registered users and their public views
/// - `task`: per-account to-do items

pub mod account;
pub mod task;
