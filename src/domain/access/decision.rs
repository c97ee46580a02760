//! Result of one access evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an evaluation ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessReason {
    /// No signed-in user.
    Unauthenticated,
    /// Signed in, but with a different role than the route requires.
    RoleMismatch,
    /// The subscription does not cover the required tier, or it could not
    /// be confirmed.
    TierInsufficient,
    /// The session or the tier check has not resolved yet.
    Pending,
    /// Every requirement holds.
    Granted,
}

impl AccessReason {
    /// Returns the kebab-case code used in logs and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessReason::Unauthenticated => "unauthenticated",
            AccessReason::RoleMismatch => "role-mismatch",
            AccessReason::TierInsufficient => "tier-insufficient",
            AccessReason::Pending => "pending",
            AccessReason::Granted => "granted",
        }
    }
}

impl fmt::Display for AccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Allow/deny plus the reason. Recomputed on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: AccessReason,
}

impl AccessDecision {
    pub fn granted() -> Self {
        Self {
            allowed: true,
            reason: AccessReason::Granted,
        }
    }

    pub fn pending() -> Self {
        Self::denied(AccessReason::Pending)
    }

    pub fn unauthenticated() -> Self {
        Self::denied(AccessReason::Unauthenticated)
    }

    pub fn role_mismatch() -> Self {
        Self::denied(AccessReason::RoleMismatch)
    }

    pub fn tier_insufficient() -> Self {
        Self::denied(AccessReason::TierInsufficient)
    }

    fn denied(reason: AccessReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}
