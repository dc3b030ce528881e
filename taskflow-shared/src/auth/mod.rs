/// Authentication and authorization utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and length validation
/// - [`jwt`]: bearer token issuance and validation
/// - [`middleware`]: the auth guard and the [`middleware::AuthContext`] extractor
/// - [`authorization`]: ownership checks on resources
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::auth::password::{hash_password, verify_password};
/// use taskflow_shared::auth::jwt::{issue_token, validate_token, JwtSettings};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("secret1")?;
/// assert!(verify_password("secret1", &hash)?);
///
/// let settings = JwtSettings::new("secret-key-at-least-32-bytes-long!!", 24);
/// let token = issue_token(Uuid::new_v4(), &settings)?;
/// let claims = validate_token(&token, &settings.secret)?;
/// # Ok(())
/// # }
/// ```

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
