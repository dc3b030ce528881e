/// Resource ownership checks
///
/// Every task belongs to exactly one account. Mutations are allowed only when
/// the authenticated requester is the recorded owner; the check compares ids
/// and never looks at anything else.
///
/// # Example
///
/// ```
/// use taskflow_shared::auth::authorization::{require_owner, AuthzError};
/// use taskflow_shared::auth::middleware::AuthContext;
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let auth = AuthContext::new(owner);
///
/// assert!(require_owner(&auth, owner).is_ok());
/// assert!(matches!(
///     require_owner(&auth, Uuid::new_v4()),
///     Err(AuthzError::NotOwner)
/// ));
/// ```

use uuid::Uuid;

use super::middleware::AuthContext;

/// Error type for authorization checks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthzError {
    /// Requester is not the owner of the resource
    #[error("Not authorized")]
    NotOwner,
}

/// Checks that the authenticated account owns a resource
///
/// # Errors
///
/// Returns `AuthzError::NotOwner` if `owner_id` differs from the requester
pub fn require_owner(auth: &AuthContext, owner_id: Uuid) -> Result<(), AuthzError> {
    if auth.account_id == owner_id {
        Ok(())
    } else {
        tracing::warn!(
            requester = %auth.account_id,
            owner = %owner_id,
            "Ownership check failed"
        );
        Err(AuthzError::NotOwner)
    }
}
