//! Subscription domain module.
//!
//! - `tier` - Role-scoped subscription tiers and their ordering
//! - `catalog` - Display names and feature lists for upgrade prompts

mod catalog;
mod tier;

pub use catalog::{TierCatalog, TierPresentation};
pub use tier::{SubscriptionTier, TierLevel};
