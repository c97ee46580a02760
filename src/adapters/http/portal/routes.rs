//! Axum router configuration for portal endpoints.
//!
//! Each guarded page gets its own `require_access` route layer. The auth
//! layer wraps the whole router so every route sees the caller's principal.

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, require_access, AccessPolicy, AuthState};
use crate::application::GuardConfig;
use crate::domain::access::AccessRequirement;
use crate::domain::foundation::Role;
use crate::domain::subscription::{SubscriptionTier, TierLevel};

use super::handlers::{
    applicant_dashboard, applicant_insights, check_access, get_tier, health, job_posting_wizard,
    list_tiers, recruiter_analytics, recruiter_dashboard, PortalAppState,
};

/// Guarded pages with the requirement each one enforces.
fn guarded_pages() -> Vec<(&'static str, AccessRequirement, MethodRouter<PortalAppState>)> {
    vec![
        (
            "/applicant/dashboard",
            AccessRequirement::role(Role::Applicant),
            get(applicant_dashboard),
        ),
        (
            "/applicant/insights",
            AccessRequirement::role(Role::Applicant)
                .with_tier(SubscriptionTier::applicant(TierLevel::Premium)),
            get(applicant_insights),
        ),
        (
            "/recruiter/dashboard",
            AccessRequirement::role(Role::Recruiter),
            get(recruiter_dashboard),
        ),
        (
            "/recruiter/jobs/new",
            AccessRequirement::role(Role::Recruiter),
            get(job_posting_wizard),
        ),
        (
            "/recruiter/analytics",
            AccessRequirement::role(Role::Recruiter)
                .with_tier(SubscriptionTier::recruiter(TierLevel::Professional)),
            get(recruiter_analytics),
        ),
    ]
}

/// Create the portal router.
///
/// # Routes
///
/// ## Open
/// - `GET /health`
/// - `GET /api/access`
/// - `GET /api/tiers`
/// - `GET /api/tiers/:identifier`
///
/// ## Guarded
/// - `GET /applicant/dashboard`
/// - `GET /applicant/insights`
/// - `GET /recruiter/dashboard`
/// - `GET /recruiter/jobs/new`
/// - `GET /recruiter/analytics`
pub fn portal_router(state: PortalAppState, validator: AuthState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/access", get(check_access))
        .route("/api/tiers", get(list_tiers))
        .route("/api/tiers/:identifier", get(get_tier));

    for (path, requirement, handler) in guarded_pages() {
        let policy = AccessPolicy::new(
            state.evaluator.clone(),
            state.destinations.clone(),
            GuardConfig::new(requirement),
        );
        router = router.route(
            path,
            handler.route_layer(middleware::from_fn_with_state(policy, require_access)),
        );
    }

    router
        .with_state(state)
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
}
