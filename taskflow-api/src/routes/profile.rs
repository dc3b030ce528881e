/// Profile endpoints for the authenticated account
///
/// - `GET /api/v1/me`
/// - `PUT /api/v1/me`

use crate::{app::AppState, error::ApiResult, extract::ApiJson};
use axum::extract::State;
use taskflow_shared::{
    auth::middleware::AuthContext,
    models::account::{AccountProfile, AccountSummary},
    services::account::{self, UpdateProfileInput},
};

/// Returns `{id, name, email, created_at, updated_at}`
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthContext,
) -> ApiResult<ApiJson<AccountProfile>> {
    let account = account::get_profile(state.store.as_ref(), auth.account_id).await?;

    Ok(ApiJson(AccountProfile::from(&account)))
}

/// Updates any of `name`, `email`, `password`; returns `{id, name, email}`
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthContext,
    ApiJson(req): ApiJson<UpdateProfileInput>,
) -> ApiResult<ApiJson<AccountSummary>> {
    let account = account::update_profile(state.store.as_ref(), auth.account_id, req).await?;

    Ok(ApiJson(AccountSummary::from(&account)))
}
