/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/v1/auth/signup` - Register a new account
/// - `POST /api/v1/auth/login` - Exchange credentials for a bearer token

use crate::{app::AppState, error::ApiResult, extract::ApiJson};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use taskflow_shared::{
    models::account::AccountSummary,
    services::account::{self, LoginInput, SignupInput},
};

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// Signup endpoint
///
/// ```text
/// POST /api/v1/auth/signup
/// Content-Type: application/json
///
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{id, name, email}`
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or malformed body
/// - `409 Conflict`: Email already registered
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupInput>,
) -> ApiResult<(StatusCode, ApiJson<AccountSummary>)> {
    let account = account::signup(state.store.as_ref(), req).await?;

    Ok((StatusCode::CREATED, ApiJson(AccountSummary::from(&account))))
}

/// Login endpoint
///
/// ```text
/// POST /api/v1/auth/login
/// Content-Type: application/json
///
/// {
///   "email": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `401 Unauthorized`: Invalid credentials
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginInput>,
) -> ApiResult<ApiJson<LoginResponse>> {
    let token = account::login(state.store.as_ref(), req, &state.jwt_settings()).await?;

    Ok(ApiJson(LoginResponse { token }))
}
