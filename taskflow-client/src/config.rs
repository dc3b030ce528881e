/// Client configuration
///
/// # Environment Variables
///
/// - `TASKFLOW_API_URL`: API base URL (default: http://localhost:5000/api/v1)
/// - `TASKFLOW_STORAGE_PATH`: local storage file (default: .taskflow/storage.json)

use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_STORAGE_PATH: &str = ".taskflow/storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_url: String,

    /// Where the persistent key/value store lives
    pub storage_path: PathBuf,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            storage_path: storage_path.into(),
        }
    }

    pub fn from_env() -> Self {
        let api_url = env::var("TASKFLOW_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let storage_path = env::var("TASKFLOW_STORAGE_PATH")
            .unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());

        Self::new(api_url, storage_path)
    }
}
