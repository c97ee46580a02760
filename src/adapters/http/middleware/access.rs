//! Route-level access middleware.
//!
//! Each protected route carries its own [`AccessPolicy`]. The middleware reads
//! the `Principal` injected by `auth_middleware`, evaluates the policy and maps
//! the resulting `GuardOutcome` onto HTTP:
//!
//! | Outcome         | Response                                          |
//! |-----------------|---------------------------------------------------|
//! | `Render`        | request passes through to the handler             |
//! | `Redirect`      | `303 See Other`, return location as `?redirect=`  |
//! | `UpgradePrompt` | `403` JSON with code `UPGRADE_REQUIRED`           |
//! | `Loading`       | `503` JSON with code `ACCESS_PENDING`             |
//!
//! A request always awaits the tier check, so `Loading` is not expected here.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use crate::application::{outcome_for, AccessEvaluator, Destinations, GuardConfig, GuardOutcome};
use crate::domain::foundation::{Principal, SessionState};
use crate::domain::subscription::SubscriptionTier;

/// Per-route policy evaluated by [`require_access`].
#[derive(Clone)]
pub struct AccessPolicy {
    evaluator: Arc<AccessEvaluator>,
    destinations: Arc<Destinations>,
    config: Arc<GuardConfig>,
}

impl AccessPolicy {
    pub fn new(
        evaluator: Arc<AccessEvaluator>,
        destinations: Arc<Destinations>,
        config: GuardConfig,
    ) -> Self {
        Self {
            evaluator,
            destinations,
            config: Arc::new(config),
        }
    }

    /// Evaluates the policy for a request at `location`.
    pub async fn outcome(&self, session: &SessionState, location: &str) -> GuardOutcome {
        let decision = self
            .evaluator
            .evaluate(session, &self.config.requirement)
            .await;
        outcome_for(decision, session, &self.config, &self.destinations, location)
    }
}

/// Body of a 403 upgrade response.
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeRequiredResponse {
    pub code: &'static str,
    pub tier: SubscriptionTier,
    pub display_name: String,
    pub features: Vec<String>,
}

/// Middleware enforcing an [`AccessPolicy`] on a route.
pub async fn require_access(
    State(policy): State<AccessPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let session = match request.extensions().get::<Principal>() {
        Some(principal) => SessionState::Authenticated(principal.clone()),
        None => SessionState::Anonymous,
    };
    let location = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    match policy.outcome(&session, &location).await {
        GuardOutcome::Render => next.run(request).await,
        outcome => outcome_response(outcome),
    }
}

/// Converts a non-render outcome into its HTTP response.
pub fn outcome_response(outcome: GuardOutcome) -> Response {
    match outcome {
        GuardOutcome::Redirect { to, return_to } => {
            Redirect::to(&redirect_location(&to, return_to.as_deref())).into_response()
        }
        GuardOutcome::UpgradePrompt(prompt) => (
            StatusCode::FORBIDDEN,
            Json(UpgradeRequiredResponse {
                code: "UPGRADE_REQUIRED",
                tier: prompt.tier,
                display_name: prompt.display_name,
                features: prompt.features,
            }),
        )
            .into_response(),
        GuardOutcome::Loading => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "error": "Access decision pending",
                "code": "ACCESS_PENDING"
            })),
        )
            .into_response(),
        GuardOutcome::Render => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Builds the `Location` value, appending the return location when present.
pub fn redirect_location(to: &str, return_to: Option<&str>) -> String {
    match return_to {
        Some(path) => {
            let separator = if to.contains('?') { '&' } else { '?' };
            format!("{to}{separator}redirect={}", urlencoding::encode(path))
        }
        None => to.to_string(),
    }
}
