//! Access handlers.
//!
//! - `evaluate_access` - Ordered role/tier checks producing an `AccessDecision`
//! - `route_guard` - Reactive per-route guard mapping decisions to outcomes

mod evaluate_access;
mod route_guard;

pub use evaluate_access::{AccessEvaluator, LocalCheck};
pub use route_guard::{
    outcome_for, Destinations, GuardConfig, GuardOutcome, RouteGuard, UpgradePrompt,
};
