//! Presentation catalog for subscription tiers.
//!
//! Used only when access is denied, to tell the user which plan unlocks the
//! page and what it includes.
//!
//! | Tier | Display name | Features |
//! |------|--------------|----------|
//! | applicant_starter | Starter | 3 |
//! | applicant_professional | Professional | 5 |
//! | applicant_premium | Premium | 6 |
//! | recruiter_basis | Basis | 3 |
//! | recruiter_starter | Starter | 4 |
//! | recruiter_professional | Professional | 5 |
//! | recruiter_enterprise | Enterprise | 6 |

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::tier::{SubscriptionTier, TierLevel};

static STANDARD_CATALOG: Lazy<TierCatalog> = Lazy::new(TierCatalog::build_standard);

/// Display information for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierPresentation {
    /// Human-readable plan name.
    pub display_name: String,
    /// Benefits of the plan, in marketing order.
    pub features: Vec<String>,
}

#[derive(Debug)]
struct CatalogEntry {
    display_name: &'static str,
    features: &'static [&'static str],
}

/// Immutable tier to presentation lookup table.
#[derive(Debug)]
pub struct TierCatalog {
    entries: HashMap<SubscriptionTier, CatalogEntry>,
}

impl TierCatalog {
    /// Returns the process-wide catalog of the tiers sold on the platform.
    pub fn standard() -> &'static TierCatalog {
        &STANDARD_CATALOG
    }

    fn build_standard() -> Self {
        let entries = [
            (
                SubscriptionTier::applicant(TierLevel::Starter),
                CatalogEntry {
                    display_name: "Starter",
                    features: &[
                        "Searchable candidate profile",
                        "Unlimited job applications",
                        "Application status tracking",
                    ],
                },
            ),
            (
                SubscriptionTier::applicant(TierLevel::Professional),
                CatalogEntry {
                    display_name: "Professional",
                    features: &[
                        "Everything in Starter",
                        "Priority placement in recruiter searches",
                        "AI-assisted cover letter drafts",
                        "Salary benchmarks for your role",
                        "See which companies viewed your profile",
                    ],
                },
            ),
            (
                SubscriptionTier::applicant(TierLevel::Premium),
                CatalogEntry {
                    display_name: "Premium",
                    features: &[
                        "Everything in Professional",
                        "Featured profile badge",
                        "Direct messages to recruiters",
                        "Interview preparation sessions",
                        "Early access to new postings",
                        "Personal career insights dashboard",
                    ],
                },
            ),
            (
                SubscriptionTier::recruiter(TierLevel::Basis),
                CatalogEntry {
                    display_name: "Basis",
                    features: &[
                        "One active job posting",
                        "Guided job posting wizard",
                        "Anti-discrimination wording check",
                    ],
                },
            ),
            (
                SubscriptionTier::recruiter(TierLevel::Starter),
                CatalogEntry {
                    display_name: "Starter",
                    features: &[
                        "Up to five active job postings",
                        "Guided job posting wizard",
                        "Anti-discrimination wording check",
                        "Salary benchmarking",
                    ],
                },
            ),
            (
                SubscriptionTier::recruiter(TierLevel::Professional),
                CatalogEntry {
                    display_name: "Professional",
                    features: &[
                        "Up to twenty active job postings",
                        "AI-generated job descriptions",
                        "Candidate search",
                        "Posting performance analytics",
                        "Team seats for three recruiters",
                    ],
                },
            ),
            (
                SubscriptionTier::recruiter(TierLevel::Enterprise),
                CatalogEntry {
                    display_name: "Enterprise",
                    features: &[
                        "Unlimited job postings",
                        "AI-generated job descriptions",
                        "Candidate search",
                        "Advanced analytics and exports",
                        "Unlimited team seats",
                        "Dedicated account manager",
                    ],
                },
            ),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Presentation for a parsed tier.
    ///
    /// Unknown tiers fall back to the level segment as their name and list
    /// no features.
    pub fn presentation(&self, tier: &SubscriptionTier) -> TierPresentation {
        match self.entries.get(tier) {
            Some(entry) => TierPresentation {
                display_name: entry.display_name.to_string(),
                features: entry.features.iter().map(|f| f.to_string()).collect(),
            },
            None => TierPresentation {
                display_name: tier.level().as_str().to_string(),
                features: Vec::new(),
            },
        }
    }

    /// Presentation for a raw `<role>_<level>` identifier.
    ///
    /// Never fails: identifiers that do not parse use the segment after the
    /// first underscore (or the whole identifier) as their name.
    pub fn lookup(&self, identifier: &str) -> TierPresentation {
        match identifier.parse::<SubscriptionTier>() {
            Ok(tier) => self.presentation(&tier),
            Err(_) => {
                let label = identifier
                    .split_once('_')
                    .map(|(_, level)| level)
                    .unwrap_or(identifier);
                TierPresentation {
                    display_name: label.to_string(),
                    features: Vec::new(),
                }
            }
        }
    }

    /// Number of tiers in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no tiers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_known_tier() {
        let catalog = TierCatalog::standard();
        assert_eq!(catalog.len(), SubscriptionTier::known().len());
        for tier in SubscriptionTier::known() {
            let presentation = catalog.presentation(&tier);
            assert!(!presentation.features.is_empty(), "{} has no features", tier);
        }
    }

    #[test]
    fn applicant_professional_has_five_features() {
        let presentation = TierCatalog::standard().lookup("applicant_professional");
        assert_eq!(presentation.display_name, "Professional");
        assert_eq!(presentation.features.len(), 5);
    }

    #[test]
    fn recruiter_basis_display_name() {
        let presentation = TierCatalog::standard().lookup("recruiter_basis");
        assert_eq!(presentation.display_name, "Basis");
    }

    #[test]
    fn unknown_level_falls_back_to_level_segment() {
        let presentation = TierCatalog::standard().lookup("applicant_ultra");
        assert_eq!(presentation.display_name, "ultra");
        assert!(presentation.features.is_empty());
    }

    #[test]
    fn known_level_in_wrong_family_is_unknown() {
        let presentation = TierCatalog::standard().lookup("applicant_enterprise");
        assert_eq!(presentation.display_name, "enterprise");
        assert!(presentation.features.is_empty());
    }

    #[test]
    fn unparseable_identifier_uses_segment_after_prefix() {
        let presentation = TierCatalog::standard().lookup("admin_Gold");
        assert_eq!(presentation.display_name, "Gold");
        assert!(presentation.features.is_empty());
    }

    #[test]
    fn identifier_without_separator_is_used_whole() {
        let presentation = TierCatalog::standard().lookup("legacy");
        assert_eq!(presentation.display_name, "legacy");
        assert!(presentation.features.is_empty());
    }
}
