//! Application layer - Handlers coordinating domain types and ports.

pub mod handlers;

pub use handlers::access::{
    outcome_for, AccessEvaluator, Destinations, GuardConfig, GuardOutcome, LocalCheck,
    RouteGuard, UpgradePrompt,
};
pub use handlers::session::SessionStore;
