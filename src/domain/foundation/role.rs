//! Account roles.
//!
//! Every principal belongs to exactly one role family. Subscription tiers are
//! scoped to a role family and never compared across families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Role of an authenticated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker browsing and applying to postings.
    Applicant,
    /// Employer publishing postings and reviewing candidates.
    Recruiter,
}

impl Role {
    /// Returns the lowercase identifier used in tier identifiers and tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applicant" => Ok(Role::Applicant),
            "recruiter" => Ok(Role::Recruiter),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("applicant".parse::<Role>().unwrap(), Role::Applicant);
        assert_eq!("recruiter".parse::<Role>().unwrap(), Role::Recruiter);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Recruiter".parse::<Role>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Recruiter).unwrap(), "\"recruiter\"");
    }

    #[test]
    fn display_matches_identifier() {
        for role in [Role::Applicant, Role::Recruiter] {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
