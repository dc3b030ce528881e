/// Authentication guard for Axum
///
/// Extracts the bearer token from the `Authorization` header, validates it and
/// adds an [`AuthContext`] to the request extensions before the request reaches
/// any handler. Requests without a valid token are rejected with
/// `401 Unauthorized` and never reach the handler.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::get, Router};
/// use taskflow_shared::auth::middleware::{create_jwt_middleware, AuthContext};
///
/// async fn protected_handler(auth: AuthContext) -> String {
///     format!("Hello, account {}!", auth.account_id)
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler))
///     .layer(middleware::from_fn(create_jwt_middleware("your-jwt-secret")));
/// ```

use std::{future::Future, pin::Pin, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::jwt::validate_token;

/// Authentication context added to request extensions
///
/// Handlers take it as an extractor argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated account ID
    pub account_id: Uuid,
}

impl AuthContext {
    /// Creates an auth context for an account
    pub fn new(account_id: Uuid) -> Self {
        Self { account_id }
    }
}

/// Error type for the authentication guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Header missing or not of the form `Bearer <token>`
    MissingCredentials,

    /// Token validation failed (bad signature, malformed, expired)
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match &self {
            AuthError::MissingCredentials => "Not authorized, no token",
            AuthError::InvalidToken(reason) => {
                tracing::debug!(reason = %reason, "Rejected bearer token");
                "Not authorized, token invalid"
            }
        };

        let body = Json(json!({
            "error": "unauthorized",
            "message": message,
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

/// Resolves request headers to an authenticated account
///
/// # Errors
///
/// - `AuthError::MissingCredentials` if the header is absent, not UTF-8, or
///   not a `Bearer` credential
/// - `AuthError::InvalidToken` if the token fails validation
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingCredentials)?;

    let claims =
        validate_token(token, secret).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(AuthContext::new(claims.sub))
}

/// JWT authentication middleware
///
/// Validates the `Authorization: Bearer <token>` header and inserts the
/// resulting [`AuthContext`] into the request extensions.
///
/// # Errors
///
/// Returns 401 Unauthorized if the header is missing or malformed, or if the
/// token is invalid or expired.
pub async fn jwt_auth_middleware(
    secret: Arc<str>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_context = authenticate(req.headers(), &secret)?;

    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}

/// Future returned by the middleware closure
pub type AuthFuture = Pin<Box<dyn Future<Output = Result<Response, AuthError>> + Send>>;

/// Creates a JWT authentication middleware closure
///
/// Captures the secret once; every request clones the `Arc`.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::get, Router};
/// use taskflow_shared::auth::middleware::create_jwt_middleware;
///
/// let app: Router = Router::new()
///     .route("/protected", get(|| async { "OK" }))
///     .layer(middleware::from_fn(create_jwt_middleware("secret")));
/// ```
pub fn create_jwt_middleware(
    secret: impl Into<String>,
) -> impl Fn(Request, Next) -> AuthFuture + Clone + Send + Sync + 'static {
    let secret: Arc<str> = Arc::from(secret.into());
    move |req, next| {
        let secret = Arc::clone(&secret);
        Box::pin(jwt_auth_middleware(secret, req, next))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AuthError::MissingCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{create_token, Claims};
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Router};
    use chrono::Duration;
    use tower::ServiceExt;

    const SECRET: &str = "middleware-test-secret-32-bytes-long!!";

    fn app() -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|auth: AuthContext| async move { auth.account_id.to_string() }),
            )
            .layer(axum::middleware::from_fn(create_jwt_middleware(SECRET)))
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    async fn call(auth: Option<String>) -> Response {
        let mut builder = HttpRequest::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    #[test]
    fn test_authenticate_valid_token() {
        let account_id = Uuid::new_v4();
        let token = create_token(&Claims::new(account_id, Duration::hours(1)), SECRET).unwrap();

        let context = authenticate(&headers_with(&format!("Bearer {}", token)), SECRET).unwrap();
        assert_eq!(context.account_id, account_id);
    }

    #[test]
    fn test_authenticate_missing_header() {
        let result = authenticate(&HeaderMap::new(), SECRET);
        assert_eq!(result.unwrap_err(), AuthError::MissingCredentials);
    }

    #[test]
    fn test_authenticate_wrong_scheme() {
        let result = authenticate(&headers_with("Basic dXNlcjpwYXNz"), SECRET);
        assert_eq!(result.unwrap_err(), AuthError::MissingCredentials);

        let result = authenticate(&headers_with("Bearer "), SECRET);
        assert_eq!(result.unwrap_err(), AuthError::MissingCredentials);
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let result = authenticate(&headers_with("Bearer garbage"), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_auth_error_into_response() {
        let response = AuthError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AuthError::InvalidToken("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_passes_context_to_handler() {
        let account_id = Uuid::new_v4();
        let token = create_token(&Claims::new(account_id, Duration::hours(1)), SECRET).unwrap();

        let response = call(Some(format!("Bearer {}", token))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, account_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_middleware_rejects_missing_token() {
        let response = call(None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Not authorized, no token");
    }

    #[tokio::test]
    async fn test_middleware_rejects_expired_token() {
        let claims = Claims::new(Uuid::new_v4(), Duration::seconds(-60));
        let token = create_token(&claims, SECRET).unwrap();

        let response = call(Some(format!("Bearer {}", token))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Not authorized, token invalid");
    }

    #[tokio::test]
    async fn test_extractor_without_guard_is_unauthorized() {
        let app: Router = Router::new().route(
            "/open",
            get(|auth: AuthContext| async move { auth.account_id.to_string() }),
        );

        let response = app
            .oneshot(HttpRequest::builder().uri("/open").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
