//! Authentication types for the domain layer.
//!
//! These types represent the current user as seen by route guards. They have
//! **no external dependencies** - any auth provider can populate them via the
//! `SessionValidator` port.
//!
//! `SessionState` folds the authentication flag and the loading flag into a
//! single value, so "authenticated but still loading" cannot be represented.

use super::{Role, UserId};
use thiserror::Error;

/// Authenticated user extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// Role family the account belongs to.
    pub role: Role,

    /// Email address, if the token carries one.
    pub email: Option<String>,
}

impl Principal {
    /// Creates a new principal.
    pub fn new(id: UserId, role: Role, email: Option<String>) -> Self {
        Self { id, role, email }
    }
}

/// Current session as observed by the access-control path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Session restore or sign-in is still in flight.
    #[default]
    Loading,
    /// No signed-in user.
    Anonymous,
    /// A signed-in user.
    Authenticated(Principal),
}

impl SessionState {
    /// Returns the signed-in principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }
}

/// Authentication errors that can occur during token validation.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the auth provider's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token is valid but carries no recognised role.
    #[error("Token has no recognised role")]
    MissingRole,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The session was signed out or replaced while the token was validated.
    #[error("Session changed during sign-in")]
    Superseded,
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::MissingRole
        )
    }
}
