//! What a route demands of the current user.

use serde::Deserialize;

use crate::domain::foundation::Role;
use crate::domain::subscription::SubscriptionTier;

/// Role and tier a route requires. Both are optional; an empty requirement
/// only demands authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessRequirement {
    #[serde(default)]
    pub required_role: Option<Role>,
    #[serde(default)]
    pub required_tier: Option<SubscriptionTier>,
}

impl AccessRequirement {
    /// Requirement satisfied by any signed-in user.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Requirement for a specific role.
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
            required_tier: None,
        }
    }

    /// Adds a tier requirement.
    pub fn with_tier(mut self, tier: SubscriptionTier) -> Self {
        self.required_tier = Some(tier);
        self
    }
}
