//! AccessEvaluator - decides whether the current user may view a route.
//!
//! Checks run in a fixed order: loading, authentication, role, tier. The first
//! failing check decides, so an anonymous user is always reported as
//! `unauthenticated` no matter what the route requires.
//!
//! The only suspension point is the tier authority call. Its failures are
//! logged and turned into `tier-insufficient` (fail closed); they never reach
//! the caller as errors.

use std::sync::Arc;

use crate::domain::access::{AccessDecision, AccessRequirement};
use crate::domain::foundation::{SessionState, UserId};
use crate::domain::subscription::SubscriptionTier;
use crate::ports::TierAuthority;

/// Outcome of the synchronous part of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalCheck {
    /// The decision does not depend on the tier authority.
    Decided(AccessDecision),
    /// The decision hinges on a remote tier check for this user and tier.
    NeedsTierCheck {
        user_id: UserId,
        tier: SubscriptionTier,
    },
}

/// Produces access decisions for route guards.
///
/// Holds no state besides the authority handle; every call recomputes from
/// its inputs.
pub struct AccessEvaluator {
    authority: Arc<dyn TierAuthority>,
}

impl AccessEvaluator {
    pub fn new(authority: Arc<dyn TierAuthority>) -> Self {
        Self { authority }
    }

    /// Runs every check that needs no remote call.
    pub fn check_locally(session: &SessionState, requirement: &AccessRequirement) -> LocalCheck {
        let principal = match session {
            SessionState::Loading => return LocalCheck::Decided(AccessDecision::pending()),
            SessionState::Anonymous => {
                return LocalCheck::Decided(AccessDecision::unauthenticated())
            }
            SessionState::Authenticated(principal) => principal,
        };

        if let Some(required_role) = requirement.required_role {
            if required_role != principal.role {
                return LocalCheck::Decided(AccessDecision::role_mismatch());
            }
        }

        match &requirement.required_tier {
            None => LocalCheck::Decided(AccessDecision::granted()),
            Some(tier) if tier.role() != principal.role => {
                tracing::warn!(
                    user_id = %principal.id,
                    role = %principal.role,
                    tier = %tier,
                    "Route requires a tier from another role family"
                );
                LocalCheck::Decided(AccessDecision::tier_insufficient())
            }
            Some(tier) => LocalCheck::NeedsTierCheck {
                user_id: principal.id.clone(),
                tier: tier.clone(),
            },
        }
    }

    /// Asks the tier authority, failing closed on errors.
    pub async fn check_tier(&self, user_id: &UserId, tier: &SubscriptionTier) -> AccessDecision {
        match self.authority.has_access(user_id, tier).await {
            Ok(true) => AccessDecision::granted(),
            Ok(false) => AccessDecision::tier_insufficient(),
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    tier = %tier,
                    error = %e,
                    "Tier check failed, denying access"
                );
                AccessDecision::tier_insufficient()
            }
        }
    }

    /// Full evaluation, awaiting the tier authority when needed.
    pub async fn evaluate(
        &self,
        session: &SessionState,
        requirement: &AccessRequirement,
    ) -> AccessDecision {
        let decision = match Self::check_locally(session, requirement) {
            LocalCheck::Decided(decision) => decision,
            LocalCheck::NeedsTierCheck { user_id, tier } => self.check_tier(&user_id, &tier).await,
        };

        tracing::debug!(reason = %decision.reason, "Access evaluated");
        decision
    }
}
