/// Common test utilities for HTTP tests
///
/// Builds the full router over an in-memory store, plus helpers to send
/// JSON requests and to sign up and log in a fresh account.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use taskflow_api::app::{build_router, AppState};
use taskflow_api::config::{ApiConfig, Config, CorsConfig, DatabaseConfig, JwtConfig, MEMORY_DATABASE_URL};
use taskflow_shared::store::memory::MemoryStore;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "http-test-secret-at-least-32-bytes-long";

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: MEMORY_DATABASE_URL.to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expires_in_hours: 1,
        },
        cors: CorsConfig {
            origin: "http://localhost:5173".to_string(),
        },
    }
}

/// Test context holding the router and its store
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: Router,
}

/// A signed-up, logged-in account
pub struct TestAccount {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

impl TestAccount {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let app = build_router(AppState::new(store.clone(), test_config()));
        Self { store, app }
    }

    /// Sends a request and returns status plus parsed JSON body
    ///
    /// Empty bodies come back as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Signs up and logs in a new account with a unique email
    pub async fn account(&self, name: &str) -> TestAccount {
        let email = format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4());

        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/auth/signup",
                None,
                Some(json!({ "name": name, "email": email, "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
        let id = body["id"].as_str().unwrap().parse().unwrap();

        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({ "email": email, "password": "secret1" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        TestAccount {
            id,
            email,
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    /// Creates a task for `account` and returns its JSON
    pub async fn create_task(&self, account: &TestAccount, title: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/tasks",
                Some(&account.bearer()),
                Some(json!({ "title": title })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body
    }
}
