/// Account operations: signup, login and the caller's own profile
///
/// Unknown email and wrong password produce the same
/// `Unauthenticated("Invalid email or password")` so login responses can't be
/// used to discover registered addresses.
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::auth::jwt::JwtSettings;
/// use taskflow_shared::services::account::{login, signup, LoginInput, SignupInput};
/// use taskflow_shared::store::memory::MemoryStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// let jwt = JwtSettings::new("secret-key-at-least-32-bytes-long!!", 24);
///
/// signup(&store, SignupInput {
///     name: "Alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password: "secret1".to_string(),
/// }).await?;
///
/// let token = login(&store, LoginInput {
///     email: "alice@example.com".to_string(),
///     password: "secret1".to_string(),
/// }, &jwt).await?;
/// # Ok(())
/// # }
/// ```

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::{not_blank, password_rule, ServiceError, ServiceResult};
use crate::auth::jwt::{issue_token, JwtSettings};
use crate::auth::password::{hash_password, verify_password};
use crate::models::account::{Account, CreateAccount, UpdateAccount};
use crate::store::Store;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Verified against when no account has the email, so both login failures
/// pay for one Argon2 run. Same parameters as `hash_password`; matches nothing.
const UNKNOWN_ACCOUNT_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGFza2Zsb3ctbm8tYWNjdA$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// Signup body
///
/// Missing fields deserialize as empty strings so they fail validation
/// rather than JSON decoding.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "password_rule"))]
    pub password: String,
}

/// Login body
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginInput {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileInput {
    #[validate(custom(function = "not_blank", message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Please include a valid email"))]
    pub email: Option<String>,

    #[validate(custom(function = "password_rule"))]
    pub password: Option<String>,
}

/// Registers a new account
///
/// # Errors
///
/// - `Validation` for a blank name, malformed email or short password
/// - `Conflict("Email already registered")` if the email is taken
pub async fn signup(store: &dyn Store, input: SignupInput) -> ServiceResult<Account> {
    input.validate()?;

    let password_hash = hash_password(&input.password)?;

    let account = store
        .create_account(CreateAccount {
            name: input.name,
            email: input.email,
            password_hash,
        })
        .await?;

    info!(account_id = %account.id, "Account created");
    Ok(account)
}

/// Checks credentials and issues a bearer token
///
/// # Errors
///
/// - `Validation` for a malformed email or empty password
/// - `Unauthenticated("Invalid email or password")` for unknown email or wrong
///   password alike
pub async fn login(
    store: &dyn Store,
    input: LoginInput,
    jwt: &JwtSettings,
) -> ServiceResult<String> {
    input.validate()?;

    let account = store.find_account_by_email(&input.email).await?;
    let stored_hash = account
        .as_ref()
        .map_or(UNKNOWN_ACCOUNT_HASH, |a| a.password_hash.as_str());
    let matches = verify_password(&input.password, stored_hash)?;

    let account = match account {
        Some(account) if matches => account,
        Some(account) => {
            warn!(account_id = %account.id, "Login attempt with wrong password");
            return Err(ServiceError::Unauthenticated(INVALID_CREDENTIALS.to_string()));
        }
        None => {
            warn!("Login attempt for unknown email");
            return Err(ServiceError::Unauthenticated(INVALID_CREDENTIALS.to_string()));
        }
    };

    let token = issue_token(account.id, jwt)?;

    info!(account_id = %account.id, "Login succeeded");
    Ok(token)
}

/// Loads the caller's account
///
/// # Errors
///
/// `NotFound("User not found")` if the account no longer exists
pub async fn get_profile(store: &dyn Store, account_id: Uuid) -> ServiceResult<Account> {
    store
        .find_account(account_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
}

/// Applies the supplied profile fields, re-hashing a new password
///
/// # Errors
///
/// - `Validation` for a blank name, malformed email or short password
/// - `Conflict` if the new email belongs to another account
/// - `NotFound("User not found")` if the account no longer exists
pub async fn update_profile(
    store: &dyn Store,
    account_id: Uuid,
    input: UpdateProfileInput,
) -> ServiceResult<Account> {
    input.validate()?;

    let password_hash = match &input.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let changes = UpdateAccount {
        name: input.name,
        email: input.email,
        password_hash,
    };

    if changes.is_empty() {
        return get_profile(store, account_id).await;
    }

    let account = store
        .update_account(account_id, changes)
        .await?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

    info!(account_id = %account.id, "Profile updated");
    Ok(account)
}
