/// Common test utilities for client tests
///
/// Serves the real API router over an in-memory store on an ephemeral
/// port and hands out clients with their own temporary local storage.

use std::sync::Arc;

use taskflow_api::app::{build_router, AppState};
use taskflow_api::config::{ApiConfig, Config, CorsConfig, DatabaseConfig, JwtConfig, MEMORY_DATABASE_URL};
use taskflow_client::api::ApiClient;
use taskflow_client::models::SignupRequest;
use taskflow_client::storage::LocalStore;
use taskflow_shared::store::memory::MemoryStore;
use tempfile::TempDir;
use uuid::Uuid;

pub const PASSWORD: &str = "secret1";

fn server_config() -> Config {
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
            secret: "client-test-secret-at-least-32-bytes".to_string(),
            expires_in_hours: 1,
        },
        cors: CorsConfig {
            origin: "http://localhost:5173".to_string(),
        },
    }
}

/// A running API server
pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryStore>,
}

impl TestServer {
    pub async fn start() -> Self {
        let store = Arc::new(MemoryStore::new());
        let app = build_router(AppState::new(store.clone(), server_config()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            store,
        }
    }

    /// Client with empty local storage; keep the `TempDir` alive
    pub fn client(&self) -> (ApiClient, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(LocalStore::open(dir.path().join("storage.json")));
        (ApiClient::new(self.base_url.clone(), store), dir)
    }

    /// Client that has signed up and logged in a fresh account
    pub async fn logged_in_client(&self, name: &str) -> (ApiClient, TempDir, String) {
        let (client, dir) = self.client();
        let email = unique_email(name);

        client
            .signup(&SignupRequest {
                name: name.to_string(),
                email: email.clone(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();
        client.login(&email, PASSWORD).await.unwrap();

        (client, dir, email)
    }
}

pub fn unique_email(name: &str) -> String {
    format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4())
}
