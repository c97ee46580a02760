//! Mock session validator for tests.
//!
//! # Example
//!
//! ```ignore
//! use hiring_portal::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new()
//!     .with_test_user("valid-token", "user-123", Role::Recruiter);
//!
//! let principal = validator.validate("valid-token").await?;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Principal, Role, UserId, ValidationError};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to principals. Tokens not in the map return
/// `InvalidToken`.
#[derive(Debug, Default, Clone)]
pub struct MockSessionValidator {
    tokens: HashMap<String, Principal>,
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a principal.
    pub fn with_principal(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.tokens.insert(token.into(), principal);
        self
    }

    /// Adds a valid token for a generated test user.
    pub fn with_test_user(
        self,
        token: impl Into<String>,
        user_id: &str,
        role: Role,
    ) -> Result<Self, ValidationError> {
        let principal = Principal::new(
            UserId::new(user_id)?,
            role,
            Some(format!("{}@test.example.com", user_id)),
        );
        Ok(self.with_principal(token, principal))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_principal_for_registered_token() {
        let validator = MockSessionValidator::new()
            .with_test_user("tok", "a1", Role::Applicant)
            .unwrap();

        let principal = validator.validate("tok").await.unwrap();

        assert_eq!(principal.id.as_str(), "a1");
        assert_eq!(principal.role, Role::Applicant);
        assert_eq!(principal.email.as_deref(), Some("a1@test.example.com"));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let validator = MockSessionValidator::new();
        assert_eq!(validator.validate("nope").await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn forced_error_wins_over_registered_token() {
        let validator = MockSessionValidator::new()
            .with_test_user("tok", "a1", Role::Applicant)
            .unwrap()
            .with_error(AuthError::TokenExpired);

        assert_eq!(validator.validate("tok").await, Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_user_rejects_empty_id() {
        assert!(MockSessionValidator::new()
            .with_test_user("tok", "", Role::Applicant)
            .is_err());
    }

    #[test]
    fn counts_tokens() {
        let validator = MockSessionValidator::new()
            .with_test_user("t1", "a1", Role::Applicant)
            .unwrap()
            .with_test_user("t2", "r1", Role::Recruiter)
            .unwrap();
        assert_eq!(validator.token_count(), 2);
    }
}
