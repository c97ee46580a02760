//! RouteGuard - turns access decisions into what a protected route shows.
//!
//! A guard is configured with a requirement and the location the user asked
//! for. It publishes one of four outcomes on a `watch` channel and
//! re-evaluates whenever the session or the requirement changes.
//!
//! # Stale responses
//!
//! Every refresh takes the next value of a monotonically increasing sequence
//! number. An outcome is only published if its sequence is still the latest,
//! so a slow tier check that resolves after a newer refresh is discarded.
//!
//! ```text
//! refresh #1 ──► tier check (slow) ─────────────────► granted   (dropped)
//! refresh #2 ──────► tier check (fast) ──► denied  (published)
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use super::evaluate_access::{AccessEvaluator, LocalCheck};
use crate::domain::access::{AccessDecision, AccessReason, AccessRequirement};
use crate::domain::foundation::{Role, SessionState};
use crate::domain::subscription::{SubscriptionTier, TierCatalog};

/// Fixed redirect destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
    /// Where unauthenticated users are sent.
    pub sign_in: String,
    pub applicant_home: String,
    pub recruiter_home: String,
}

impl Destinations {
    /// Dashboard of the given role.
    pub fn home_for(&self, role: Role) -> &str {
        match role {
            Role::Applicant => &self.applicant_home,
            Role::Recruiter => &self.recruiter_home,
        }
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self {
            sign_in: "/auth".to_string(),
            applicant_home: "/applicant/dashboard".to_string(),
            recruiter_home: "/recruiter/dashboard".to_string(),
        }
    }
}

/// Per-route guard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardConfig {
    pub requirement: AccessRequirement,
    /// Overrides the sign-in destination for unauthenticated users.
    pub fallback_route: Option<String>,
}

impl GuardConfig {
    pub fn new(requirement: AccessRequirement) -> Self {
        Self {
            requirement,
            fallback_route: None,
        }
    }

    pub fn with_fallback_route(mut self, route: impl Into<String>) -> Self {
        self.fallback_route = Some(route.into());
        self
    }
}

/// Content of an upgrade prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradePrompt {
    pub tier: SubscriptionTier,
    pub display_name: String,
    pub features: Vec<String>,
}

/// What a protected route renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuardOutcome {
    /// Decision pending. No navigation may happen yet.
    Loading,
    /// Navigate away. `return_to` carries the requested location so that
    /// navigation can resume after sign-in.
    Redirect {
        to: String,
        return_to: Option<String>,
    },
    /// Offer the plan that unlocks the route.
    UpgradePrompt(UpgradePrompt),
    /// Show the protected content.
    Render,
}

/// Maps a decision to the outcome the route must show.
pub fn outcome_for(
    decision: AccessDecision,
    session: &SessionState,
    config: &GuardConfig,
    destinations: &Destinations,
    requested_location: &str,
) -> GuardOutcome {
    let sign_in = || GuardOutcome::Redirect {
        to: config
            .fallback_route
            .clone()
            .unwrap_or_else(|| destinations.sign_in.clone()),
        return_to: Some(requested_location.to_string()),
    };
    let home = |role: Role| GuardOutcome::Redirect {
        to: destinations.home_for(role).to_string(),
        return_to: None,
    };

    match decision.reason {
        AccessReason::Pending => GuardOutcome::Loading,
        AccessReason::Granted => GuardOutcome::Render,
        AccessReason::Unauthenticated => sign_in(),
        AccessReason::RoleMismatch => match session.principal() {
            Some(principal) => home(principal.role),
            None => sign_in(),
        },
        AccessReason::TierInsufficient => match &config.requirement.required_tier {
            Some(tier) => {
                let presentation = TierCatalog::standard().presentation(tier);
                GuardOutcome::UpgradePrompt(UpgradePrompt {
                    tier: tier.clone(),
                    display_name: presentation.display_name,
                    features: presentation.features,
                })
            }
            None => match session.principal() {
                Some(principal) => home(principal.role),
                None => sign_in(),
            },
        },
    }
}

/// Reactive guard for one protected route.
pub struct RouteGuard {
    evaluator: Arc<AccessEvaluator>,
    destinations: Destinations,
    requested_location: String,
    config: RwLock<GuardConfig>,
    sequence: AtomicU64,
    outcome_tx: watch::Sender<GuardOutcome>,
}

impl RouteGuard {
    /// Creates a guard that starts out `Loading`.
    pub fn new(
        evaluator: Arc<AccessEvaluator>,
        destinations: Destinations,
        config: GuardConfig,
        requested_location: impl Into<String>,
    ) -> Self {
        let (outcome_tx, _) = watch::channel(GuardOutcome::Loading);
        Self {
            evaluator,
            destinations,
            requested_location: requested_location.into(),
            config: RwLock::new(config),
            sequence: AtomicU64::new(0),
            outcome_tx,
        }
    }

    /// Latest published outcome.
    pub fn current(&self) -> GuardOutcome {
        self.outcome_tx.borrow().clone()
    }

    /// Receiver notified on every outcome change.
    pub fn subscribe(&self) -> watch::Receiver<GuardOutcome> {
        self.outcome_tx.subscribe()
    }

    /// Re-evaluates against `session` and publishes the result unless a newer
    /// refresh started meanwhile. Returns the outcome published afterwards.
    pub async fn refresh(&self, session: &SessionState) -> GuardOutcome {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let config = self.config.read().await.clone();

        let decision = match AccessEvaluator::check_locally(session, &config.requirement) {
            LocalCheck::Decided(decision) => decision,
            LocalCheck::NeedsTierCheck { user_id, tier } => {
                self.publish(sequence, GuardOutcome::Loading);
                self.evaluator.check_tier(&user_id, &tier).await
            }
        };

        let outcome = outcome_for(
            decision,
            session,
            &config,
            &self.destinations,
            &self.requested_location,
        );
        self.publish(sequence, outcome);
        self.current()
    }

    /// Replaces the requirement and re-evaluates.
    pub async fn set_config(&self, config: GuardConfig, session: &SessionState) -> GuardOutcome {
        *self.config.write().await = config;
        self.refresh(session).await
    }

    /// Re-evaluates on every change of the session until the sender is dropped.
    ///
    /// Each change starts its own refresh; overlapping refreshes are resolved
    /// by the sequence check.
    pub fn watch_session(
        self: Arc<Self>,
        mut session_rx: watch::Receiver<SessionState>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let session = session_rx.borrow_and_update().clone();
                let guard = Arc::clone(&self);
                tokio::spawn(async move {
                    guard.refresh(&session).await;
                });

                if session_rx.changed().await.is_err() {
                    break;
                }
            }
        })
    }

    fn publish(&self, sequence: u64, outcome: GuardOutcome) {
        self.outcome_tx.send_if_modified(|current| {
            if self.sequence.load(Ordering::SeqCst) != sequence {
                tracing::debug!(sequence, "Discarding superseded guard outcome");
                return false;
            }
            if *current == outcome {
                return false;
            }
            *current = outcome;
            true
        });
    }
}
