use crate::api::ApiClient;
use crate::router::Route;

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub loading: bool,
    /// Shown inline under the form
    pub error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in, storing the token; navigates to the dashboard on success
    pub async fn submit(&mut self, api: &ApiClient) -> Option<Route> {
        self.error = None;
        self.loading = true;

        let result = api.login(&self.email, &self.password).await;
        self.loading = false;

        match result {
            Ok(_) => Some(Route::Dashboard),
            Err(e) => {
                self.error = Some(e.server_message().unwrap_or("Login failed").to_string());
                None
            }
        }
    }
}
