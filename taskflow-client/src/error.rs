use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 401 from the server; the token is missing, invalid or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success response, with the server's `message`
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success response whose body didn't match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// The server-provided message, when the server answered at all
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized(message) | ClientError::Api { message, .. } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
