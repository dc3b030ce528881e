/// HTTP client for the TaskFlow API
///
/// Attaches `Authorization: Bearer <token>` whenever the local store holds a
/// token, and turns error bodies into [`ClientError`]s.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use taskflow_client::{api::ApiClient, models::NewTask, storage::LocalStore};
///
/// # async fn example() -> taskflow_client::error::ClientResult<()> {
/// let store = Arc::new(LocalStore::open("/tmp/taskflow.json"));
/// let client = ApiClient::new("http://localhost:5000/api/v1", store);
///
/// client.login("alice@example.com", "secret1").await?;
/// client.create_task(&NewTask { title: "Buy milk".into(), description: None }).await?;
/// # Ok(())
/// # }
/// ```

use std::sync::Arc;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    AccountSummary, ErrorBody, LoginRequest, MessageResponse, NewTask, Profile, ProfilePatch,
    SignupRequest, Task, TaskPatch, TokenResponse,
};
use crate::storage::{LocalStore, TOKEN_KEY};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: Arc<LocalStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<LocalStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Opens the configured local store and targets the configured API
    pub fn from_config(config: &ClientConfig) -> Self {
        let store = Arc::new(LocalStore::open(&config.storage_path));
        Self::new(config.api_url.clone(), store)
    }

    pub fn store(&self) -> &Arc<LocalStore> {
        &self.store
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);

        match self.store.token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let response = check_status(response).await?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(method, path).json(body)).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<AccountSummary> {
        self.send_json(Method::POST, "/auth/signup", request).await
    }

    /// Logs in and stores the returned token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self.send_json(Method::POST, "/auth/login", &body).await?;

        self.store.set(TOKEN_KEY, response.token.clone())?;
        Ok(response.token)
    }

    /// Forgets the stored token
    pub fn logout(&self) -> ClientResult<()> {
        Ok(self.store.remove(TOKEN_KEY)?)
    }

    pub async fn profile(&self) -> ClientResult<Profile> {
        self.send(self.request(Method::GET, "/me")).await
    }

    pub async fn update_profile(&self, patch: &ProfilePatch) -> ClientResult<AccountSummary> {
        self.send_json(Method::PUT, "/me", patch).await
    }

    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        self.send(self.request(Method::GET, "/tasks")).await
    }

    pub async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        self.send_json(Method::POST, "/tasks", task).await
    }

    pub async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> ClientResult<Task> {
        self.send_json(Method::PUT, &format!("/tasks/{}", id), patch)
            .await
    }

    pub async fn delete_task(&self, id: Uuid) -> ClientResult<String> {
        let response: MessageResponse = self
            .send(self.request(Method::DELETE, &format!("/tasks/{}", id)))
            .await?;
        Ok(response.message)
    }
}

/// Passes success responses through and converts the rest into errors
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => fallback,
    };

    debug!(status = status.as_u16(), message = %message, "API request failed");

    if status == StatusCode::UNAUTHORIZED {
        Err(ClientError::Unauthorized(message))
    } else {
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
