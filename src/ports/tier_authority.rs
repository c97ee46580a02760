//! Tier authority port for subscription entitlement checks.
//!
//! The tier authority is the service of record for "does this user's current
//! subscription cover this tier (or a higher one in the same role family)".
//! The access evaluator is its only caller.
//!
//! # Contract
//!
//! - Calls are idempotent and safe to repeat with the same arguments.
//! - `Ok(false)` is a genuine denial; `Err(_)` means the answer is unknown.
//!   Callers fail closed on errors, so implementations must not mask
//!   failures as `Ok(true)`.
//!
//! # Example
//!
//! ```ignore
//! use hiring_portal::ports::TierAuthority;
//!
//! async fn can_view(authority: &dyn TierAuthority, user_id: &UserId) -> bool {
//!     let tier = "applicant_professional".parse().unwrap();
//!     authority.has_access(user_id, &tier).await.unwrap_or(false)
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionTier;

/// Port for asking whether a user's subscription covers a tier.
#[async_trait]
pub trait TierAuthority: Send + Sync {
    /// Returns whether `user_id` is entitled to `tier` or higher.
    async fn has_access(
        &self,
        user_id: &UserId,
        tier: &SubscriptionTier,
    ) -> Result<bool, TierAuthorityError>;
}

/// Errors from the remote tier authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierAuthorityError {
    /// Network failure, timeout or non-success status.
    #[error("Tier authority unavailable: {0}")]
    Unavailable(String),

    /// The authority answered with something other than a boolean.
    #[error("Unexpected tier authority response: {0}")]
    UnexpectedResponse(String),
}

impl TierAuthorityError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse(message.into())
    }
}
