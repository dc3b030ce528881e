/// Business operations over the [`Store`](crate::store::Store)
///
/// Services validate input, enforce ownership and translate storage, hashing
/// and token failures into [`ServiceError`]. They know nothing about HTTP; the
/// API crate maps each variant onto a status code.
///
/// # Modules
///
/// - [`account`]: signup, login, profile read/update
/// - [`task`]: per-account task CRUD

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::auth::{
    authorization::AuthzError, jwt::JwtError, password::PasswordError,
    password::validate_password_length,
};
use crate::store::StoreError;

pub mod account;
pub mod task;

/// One failed input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Service-layer error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed or missing input; `message` repeats the first detail
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    /// Bad credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// Requester does not own the resource
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Unique value already taken
    #[error("{0}")]
    Conflict(String),

    /// Store, hashing or token failure; never shown to clients verbatim
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Single-field validation failure
    pub fn invalid(field: &str, message: &str) -> Self {
        ServiceError::Validation {
            message: message.to_string(),
            details: vec![FieldError::new(field, message)],
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    FieldError::new(
                        field.to_string(),
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid {}", field)),
                    )
                })
            })
            .collect();

        // HashMap order is random; keep responses stable
        details.sort_by(|a, b| a.field.cmp(&b.field));

        let message = details
            .first()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| "Validation failed".to_string());

        ServiceError::Validation { message, details }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(field) if field == "email" => {
                ServiceError::Conflict("Email already registered".to_string())
            }
            StoreError::Duplicate(field) => {
                ServiceError::Conflict(format!("Duplicate value for {}", field))
            }
            StoreError::Database(e) => ServiceError::Internal(e.to_string()),
        }
    }
}

impl From<PasswordError> for ServiceError {
    fn from(err: PasswordError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<JwtError> for ServiceError {
    fn from(err: JwtError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<AuthzError> for ServiceError {
    fn from(err: AuthzError) -> Self {
        ServiceError::Forbidden(err.to_string())
    }
}

/// Rejects empty and whitespace-only strings
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Minimum password length as a field validator
pub(crate) fn password_rule(value: &str) -> Result<(), ValidationError> {
    validate_password_length(value).map_err(|message| {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::Owned(message));
        error
    })
}
