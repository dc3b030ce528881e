/// Page view models
///
/// Each page holds its form state and snapshot. Async actions return
/// `Some(route)` when the page wants to navigate away.

pub mod dashboard;
pub mod login;
pub mod signup;

pub use dashboard::{DashboardPage, TaskFilter};
pub use login::LoginPage;
pub use signup::SignupPage;
