//! Session validation port for access tokens.
//!
//! This port defines the contract for validating access tokens and extracting
//! the principal. It is provider-agnostic - the JWT adapter covers the managed
//! auth service and a mock covers tests.
//!
//! All implementations MUST validate:
//! - **Signature**: Token must be signed by the auth service
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired
//! - **Role**: Token must carry a role the platform knows

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Principal};

/// Validates access tokens and extracts user identity.
///
/// Used by the session store when restoring or establishing a session, and by
/// the HTTP middleware for Bearer tokens.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::MissingRole` when no known role is present
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token and return the principal it belongs to.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<Principal, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};

    /// Accepts tokens of the form `<role>:<user id>`.
    struct PrefixValidator;

    #[async_trait]
    impl SessionValidator for PrefixValidator {
        async fn validate(&self, token: &str) -> Result<Principal, AuthError> {
            let (role, id) = token.split_once(':').ok_or(AuthError::InvalidToken)?;
            let role: Role = role.parse().map_err(|_| AuthError::MissingRole)?;
            let id = UserId::new(id).map_err(|_| AuthError::InvalidToken)?;
            Ok(Principal::new(id, role, None))
        }
    }

    #[tokio::test]
    async fn validator_is_usable_as_trait_object() {
        let validator: Box<dyn SessionValidator> = Box::new(PrefixValidator);

        let principal = validator.validate("recruiter:r7").await.unwrap();
        assert_eq!(principal.id.as_str(), "r7");
        assert_eq!(principal.role, Role::Recruiter);
    }

    #[tokio::test]
    async fn contract_errors_are_distinguishable() {
        assert_eq!(PrefixValidator.validate("garbage").await, Err(AuthError::InvalidToken));
        assert_eq!(PrefixValidator.validate("admin:a1").await, Err(AuthError::MissingRole));
    }

    #[test]
    fn session_validator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
    }
}
