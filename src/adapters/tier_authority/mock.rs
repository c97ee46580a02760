//! In-memory tier authority for tests and local development.
//!
//! Each user holds at most one subscription tier. A check succeeds when the
//! held tier includes the required one within the same role family, which
//! mirrors the "that tier or higher" rule of the real authority.
//!
//! # Example
//!
//! ```ignore
//! use hiring_portal::adapters::tier_authority::MockTierAuthority;
//!
//! let authority = MockTierAuthority::new()
//!     .with_subscription(user_id, "applicant_premium".parse()?)
//!     .with_delay("applicant_premium".parse()?, Duration::from_millis(50));
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionTier;
use crate::ports::{TierAuthority, TierAuthorityError};

/// Mock tier authority backed by a map of user subscriptions.
#[derive(Debug, Default)]
pub struct MockTierAuthority {
    subscriptions: RwLock<HashMap<UserId, SubscriptionTier>>,
    force_error: RwLock<Option<TierAuthorityError>>,
    delays: RwLock<HashMap<SubscriptionTier, Duration>>,
    calls: AtomicUsize,
}

impl MockTierAuthority {
    /// Creates an authority where nobody holds a subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives `user_id` the subscription `tier`.
    pub fn with_subscription(mut self, user_id: UserId, tier: SubscriptionTier) -> Self {
        self.subscriptions.get_mut().insert(user_id, tier);
        self
    }

    /// Forces every check to fail with `error`.
    pub fn with_error(mut self, error: TierAuthorityError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Delays checks for `tier` by `delay` before answering.
    pub fn with_delay(mut self, tier: SubscriptionTier, delay: Duration) -> Self {
        self.delays.get_mut().insert(tier, delay);
        self
    }

    /// Changes a user's subscription at runtime.
    pub async fn set_subscription(&self, user_id: UserId, tier: SubscriptionTier) {
        self.subscriptions.write().await.insert(user_id, tier);
    }

    /// Clears the forced error and returns to normal operation.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    /// Number of checks received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TierAuthority for MockTierAuthority {
    async fn has_access(
        &self,
        user_id: &UserId,
        tier: &SubscriptionTier,
    ) -> Result<bool, TierAuthorityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.read().await.get(tier).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.force_error.read().await.clone() {
            return Err(error);
        }

        Ok(self
            .subscriptions
            .read()
            .await
            .get(user_id)
            .is_some_and(|held| held.includes(tier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::TierLevel;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn denies_users_without_subscription() {
        let authority = MockTierAuthority::new();
        let tier = SubscriptionTier::applicant(TierLevel::Starter);
        assert!(!authority.has_access(&user("u1"), &tier).await.unwrap());
    }

    #[tokio::test]
    async fn higher_subscription_covers_lower_tier() {
        let authority = MockTierAuthority::new()
            .with_subscription(user("u1"), SubscriptionTier::recruiter(TierLevel::Enterprise));

        let professional = SubscriptionTier::recruiter(TierLevel::Professional);
        assert!(authority.has_access(&user("u1"), &professional).await.unwrap());
    }

    #[tokio::test]
    async fn lower_subscription_does_not_cover_higher_tier() {
        let authority = MockTierAuthority::new()
            .with_subscription(user("u1"), SubscriptionTier::applicant(TierLevel::Starter));

        let premium = SubscriptionTier::applicant(TierLevel::Premium);
        assert!(!authority.has_access(&user("u1"), &premium).await.unwrap());
    }

    #[tokio::test]
    async fn forced_error_is_returned_until_cleared() {
        let authority = MockTierAuthority::new()
            .with_subscription(user("u1"), SubscriptionTier::applicant(TierLevel::Premium))
            .with_error(TierAuthorityError::unavailable("down"));
        let tier = SubscriptionTier::applicant(TierLevel::Premium);

        assert!(authority.has_access(&user("u1"), &tier).await.is_err());

        authority.clear_error().await;
        assert!(authority.has_access(&user("u1"), &tier).await.unwrap());
    }

    #[tokio::test]
    async fn set_subscription_changes_answer() {
        let authority = MockTierAuthority::new();
        let tier = SubscriptionTier::applicant(TierLevel::Professional);

        assert!(!authority.has_access(&user("u1"), &tier).await.unwrap());
        authority.set_subscription(user("u1"), tier.clone()).await;
        assert!(authority.has_access(&user("u1"), &tier).await.unwrap());
    }

    #[tokio::test]
    async fn counts_calls() {
        let authority = MockTierAuthority::new();
        let tier = SubscriptionTier::applicant(TierLevel::Starter);

        let _ = authority.has_access(&user("u1"), &tier).await;
        let _ = authority.has_access(&user("u2"), &tier).await;

        assert_eq!(authority.call_count(), 2);
    }
}
