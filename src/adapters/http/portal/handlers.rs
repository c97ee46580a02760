//! HTTP handlers for portal endpoints.
//!
//! Guarded page handlers only run once `require_access` has let the request
//! through, so they can rely on `RequireAuth`.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};

use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::{outcome_for, AccessEvaluator, Destinations, GuardConfig};
use crate::domain::foundation::SessionState;
use crate::domain::subscription::{SubscriptionTier, TierCatalog};

use super::dto::{AccessCheckResponse, AccessQuery, PageResponse, TierListResponse, TierResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for portal routes.
#[derive(Clone)]
pub struct PortalAppState {
    pub evaluator: Arc<AccessEvaluator>,
    pub destinations: Arc<Destinations>,
}

impl PortalAppState {
    pub fn new(evaluator: Arc<AccessEvaluator>, destinations: Destinations) -> Self {
        Self {
            evaluator,
            destinations: Arc::new(destinations),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Open Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /api/access
///
/// Evaluates the queried requirement for the caller and reports both the
/// decision and the outcome a guarded route would produce.
pub async fn check_access(
    State(state): State<PortalAppState>,
    OptionalAuth(principal): OptionalAuth,
    Query(query): Query<AccessQuery>,
) -> Json<AccessCheckResponse> {
    let session = match principal {
        Some(principal) => SessionState::Authenticated(principal),
        None => SessionState::Anonymous,
    };
    let mut config = GuardConfig::new(query.requirement());
    if let Some(route) = &query.fallback_route {
        config = config.with_fallback_route(route.clone());
    }
    let location = query.location.as_deref().unwrap_or("/");

    let decision = state.evaluator.evaluate(&session, &config.requirement).await;
    let guard = outcome_for(decision, &session, &config, &state.destinations, location);

    Json(AccessCheckResponse {
        allowed: decision.allowed,
        reason: decision.reason,
        guard,
    })
}

/// GET /api/tiers
pub async fn list_tiers() -> Json<TierListResponse> {
    let catalog = TierCatalog::standard();
    let tiers = SubscriptionTier::known()
        .into_iter()
        .map(|tier| {
            let presentation = catalog.presentation(&tier);
            TierResponse::new(tier.to_string(), presentation)
        })
        .collect();
    Json(TierListResponse { tiers })
}

/// GET /api/tiers/:identifier
///
/// Never fails: unknown identifiers degrade to their raw name.
pub async fn get_tier(Path(identifier): Path<String>) -> Json<TierResponse> {
    let presentation = TierCatalog::standard().lookup(&identifier);
    Json(TierResponse::new(identifier, presentation))
}

// ════════════════════════════════════════════════════════════════════════════════
// Guarded Pages
// ════════════════════════════════════════════════════════════════════════════════

/// GET /applicant/dashboard
pub async fn applicant_dashboard(RequireAuth(principal): RequireAuth) -> Json<PageResponse> {
    Json(PageResponse::new("applicant_dashboard", &principal))
}

/// GET /applicant/insights
pub async fn applicant_insights(RequireAuth(principal): RequireAuth) -> Json<PageResponse> {
    Json(PageResponse::new("applicant_insights", &principal))
}

/// GET /recruiter/dashboard
pub async fn recruiter_dashboard(RequireAuth(principal): RequireAuth) -> Json<PageResponse> {
    Json(PageResponse::new("recruiter_dashboard", &principal))
}

/// GET /recruiter/jobs/new
pub async fn job_posting_wizard(RequireAuth(principal): RequireAuth) -> Json<PageResponse> {
    Json(PageResponse::new("job_posting_wizard", &principal))
}

/// GET /recruiter/analytics
pub async fn recruiter_analytics(RequireAuth(principal): RequireAuth) -> Json<PageResponse> {
    Json(PageResponse::new("recruiter_analytics", &principal))
}
