//! HTTP DTOs for portal endpoints.

use serde::{Deserialize, Serialize};

use crate::application::GuardOutcome;
use crate::domain::access::{AccessReason, AccessRequirement};
use crate::domain::foundation::{Principal, Role};
use crate::domain::subscription::{SubscriptionTier, TierPresentation};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query for `GET /api/access`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessQuery {
    #[serde(default)]
    pub required_role: Option<Role>,
    #[serde(default)]
    pub required_tier: Option<SubscriptionTier>,
    /// Location the caller wants to open, used as the redirect return path.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub fallback_route: Option<String>,
}

impl AccessQuery {
    pub fn requirement(&self) -> AccessRequirement {
        AccessRequirement {
            required_role: self.required_role,
            required_tier: self.required_tier.clone(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for `GET /api/access`.
#[derive(Debug, Clone, Serialize)]
pub struct AccessCheckResponse {
    pub allowed: bool,
    pub reason: AccessReason,
    /// What the route would show for this decision.
    pub guard: GuardOutcome,
}

/// Page payload returned by guarded routes.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub page: &'static str,
    pub user_id: String,
    pub role: Role,
}

impl PageResponse {
    pub fn new(page: &'static str, principal: &Principal) -> Self {
        Self {
            page,
            user_id: principal.id.to_string(),
            role: principal.role,
        }
    }
}

/// Plan presentation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TierResponse {
    pub identifier: String,
    pub display_name: String,
    pub features: Vec<String>,
}

impl TierResponse {
    pub fn new(identifier: impl Into<String>, presentation: TierPresentation) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: presentation.display_name,
            features: presentation.features,
        }
    }
}

/// Response for `GET /api/tiers`.
#[derive(Debug, Clone, Serialize)]
pub struct TierListResponse {
    pub tiers: Vec<TierResponse>,
}
