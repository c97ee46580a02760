//! Subscription tier definitions.
//!
//! A tier is always scoped to one role family. The string form
//! `<role>_<level>` (e.g. `recruiter_enterprise`) is only used at the
//! boundaries and is parsed into [`SubscriptionTier`] once.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Role, ValidationError};

/// Level segment of a subscription tier.
///
/// Levels outside the known set are kept verbatim in `Other` so that newly
/// introduced tiers degrade to fallback labels instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TierLevel {
    Basis,
    Starter,
    Professional,
    Premium,
    Enterprise,
    Other(String),
}

impl TierLevel {
    /// Returns the lowercase identifier of this level.
    pub fn as_str(&self) -> &str {
        match self {
            TierLevel::Basis => "basis",
            TierLevel::Starter => "starter",
            TierLevel::Professional => "professional",
            TierLevel::Premium => "premium",
            TierLevel::Enterprise => "enterprise",
            TierLevel::Other(level) => level,
        }
    }
}

impl FromStr for TierLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("tier_level"));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError::MalformedTierLevel(s.to_string()));
        }

        Ok(match s {
            "basis" => TierLevel::Basis,
            "starter" => TierLevel::Starter,
            "professional" => TierLevel::Professional,
            "premium" => TierLevel::Premium,
            "enterprise" => TierLevel::Enterprise,
            other => TierLevel::Other(other.to_string()),
        })
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subscription tier: a level within one role family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionTier {
    role: Role,
    level: TierLevel,
}

impl SubscriptionTier {
    /// Creates a tier for the given role family.
    pub fn new(role: Role, level: TierLevel) -> Self {
        Self { role, level }
    }

    /// Shorthand for an applicant tier.
    pub fn applicant(level: TierLevel) -> Self {
        Self::new(Role::Applicant, level)
    }

    /// Shorthand for a recruiter tier.
    pub fn recruiter(level: TierLevel) -> Self {
        Self::new(Role::Recruiter, level)
    }

    /// Every tier sold on the platform, cheapest first within each role.
    pub fn known() -> Vec<SubscriptionTier> {
        vec![
            Self::applicant(TierLevel::Starter),
            Self::applicant(TierLevel::Professional),
            Self::applicant(TierLevel::Premium),
            Self::recruiter(TierLevel::Basis),
            Self::recruiter(TierLevel::Starter),
            Self::recruiter(TierLevel::Professional),
            Self::recruiter(TierLevel::Enterprise),
        ]
    }

    /// Role family this tier belongs to.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Level within the role family.
    pub fn level(&self) -> &TierLevel {
        &self.level
    }

    /// Position of this tier within its role family, if it is a known tier.
    ///
    /// Ranks are only comparable between tiers of the same role.
    pub fn rank(&self) -> Option<u8> {
        match (self.role, &self.level) {
            (Role::Applicant, TierLevel::Starter) => Some(0),
            (Role::Applicant, TierLevel::Professional) => Some(1),
            (Role::Applicant, TierLevel::Premium) => Some(2),
            (Role::Recruiter, TierLevel::Basis) => Some(0),
            (Role::Recruiter, TierLevel::Starter) => Some(1),
            (Role::Recruiter, TierLevel::Professional) => Some(2),
            (Role::Recruiter, TierLevel::Enterprise) => Some(3),
            _ => None,
        }
    }

    /// Returns true if holding `self` entitles its owner to `required`.
    ///
    /// Never true across role families. Unknown tiers only satisfy themselves.
    pub fn includes(&self, required: &SubscriptionTier) -> bool {
        if self.role != required.role {
            return false;
        }
        match (self.rank(), required.rank()) {
            (Some(held), Some(needed)) => held >= needed,
            _ => self == required,
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.role, self.level)
    }
}

impl FromStr for SubscriptionTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (role, level) = s
            .split_once('_')
            .ok_or_else(|| ValidationError::MissingTierSeparator(s.to_string()))?;

        Ok(Self::new(role.parse()?, level.parse()?))
    }
}

impl TryFrom<String> for SubscriptionTier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubscriptionTier> for String {
    fn from(tier: SubscriptionTier) -> Self {
        tier.to_string()
    }
}
