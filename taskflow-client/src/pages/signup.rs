use crate::api::ApiClient;
use crate::models::SignupRequest;
use crate::notifications::Notifications;
use crate::router::Route;

/// Same floor the server enforces, checked before any request
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct SignupPage {
    pub name: String,
    pub email: String,
    pub password: String,
    pub loading: bool,
}

impl SignupPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client-side checks; the message is what the user sees
    pub fn check(&self) -> Result<(), &'static str> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err("All fields are required");
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err("Password must be at least 6 characters");
        }
        Ok(())
    }

    /// Registers the account and sends the user to the login page
    pub async fn submit(&mut self, api: &ApiClient, notes: &mut Notifications) -> Option<Route> {
        if let Err(message) = self.check() {
            notes.error(message);
            return None;
        }

        self.loading = true;
        let result = api
            .signup(&SignupRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            })
            .await;
        self.loading = false;

        match result {
            Ok(_) => {
                notes.success("Signup successful. Please login.");
                Some(Route::Login)
            }
            Err(e) => {
                notes.error(e.server_message().unwrap_or("Signup failed"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        let mut page = SignupPage::new();
        assert_eq!(page.check(), Err("All fields are required"));

        page.name = "Alice".to_string();
        page.email = "alice@x.com".to_string();
        page.password = "12345".to_string();
        assert_eq!(page.check(), Err("Password must be at least 6 characters"));

        page.password = "123456".to_string();
        assert_eq!(page.check(), Ok(()));
    }
}
