//! SessionStore - process-wide holder of the current session.
//!
//! Lifecycle:
//! 1. `new` - starts in `Loading`
//! 2. `restore` - on app load, validates a persisted token if there is one
//! 3. `sign_in` / `sign_out` - the only mutations afterwards
//!
//! Route guards only ever read from the store through `snapshot` and
//! `subscribe`.
//!
//! Every mutation takes the next generation. A validation result is only
//! published while its generation is still current, so a `sign_out` issued
//! during a slow `restore` or `sign_in` stays signed out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::foundation::{AuthError, Principal, SessionState};
use crate::ports::SessionValidator;

/// Shared session state, published over a `watch` channel.
pub struct SessionStore {
    validator: Arc<dyn SessionValidator>,
    generation: AtomicU64,
    state_tx: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new(validator: Arc<dyn SessionValidator>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Loading);
        Self {
            validator,
            generation: AtomicU64::new(0),
            state_tx,
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publishes `state` if `generation` is still current. Returns whether
    /// the generation was current.
    fn publish(&self, generation: u64, state: SessionState) -> bool {
        let mut current_generation = false;
        self.state_tx.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            current_generation = true;
            if *current == state {
                return false;
            }
            *current = state;
            true
        });
        current_generation
    }

    /// Restores the session from a persisted token.
    ///
    /// Any failure leaves the store `Anonymous`; the user can still sign in.
    /// If the session changed meanwhile, the newer state is kept and
    /// returned.
    pub async fn restore(&self, persisted_token: Option<&str>) -> SessionState {
        let generation = self.next_generation();
        let state = match persisted_token {
            None => SessionState::Anonymous,
            Some(token) => match self.validator.validate(token).await {
                Ok(principal) => {
                    tracing::info!(user_id = %principal.id, role = %principal.role, "Session restored");
                    SessionState::Authenticated(principal)
                }
                Err(AuthError::ServiceUnavailable(msg)) => {
                    tracing::error!("Session restore failed, auth service unavailable: {}", msg);
                    SessionState::Anonymous
                }
                Err(e) => {
                    tracing::info!("Persisted session rejected: {}", e);
                    SessionState::Anonymous
                }
            },
        };

        if self.publish(generation, state.clone()) {
            state
        } else {
            tracing::debug!(generation, "Discarding superseded session restore");
            self.snapshot()
        }
    }

    /// Establishes a session from a freshly issued token.
    ///
    /// The store is `Loading` while the token is validated and ends up
    /// `Anonymous` if validation fails. Returns `AuthError::Superseded` when
    /// the session was signed out or replaced before validation finished.
    pub async fn sign_in(&self, token: &str) -> Result<Principal, AuthError> {
        let generation = self.next_generation();
        self.publish(generation, SessionState::Loading);

        match self.validator.validate(token).await {
            Ok(principal) => {
                if !self.publish(generation, SessionState::Authenticated(principal.clone())) {
                    tracing::info!(user_id = %principal.id, "Sign-in superseded");
                    return Err(AuthError::Superseded);
                }
                tracing::info!(user_id = %principal.id, role = %principal.role, "Signed in");
                Ok(principal)
            }
            Err(e) => {
                tracing::warn!("Sign-in rejected: {}", e);
                self.publish(generation, SessionState::Anonymous);
                Err(e)
            }
        }
    }

    /// Tears the session down. Validations still in flight are discarded.
    pub fn sign_out(&self) {
        self.next_generation();
        let previous = self.state_tx.send_replace(SessionState::Anonymous);
        if let Some(principal) = previous.principal() {
            tracing::info!(user_id = %principal.id, "Signed out");
        }
    }

    /// Current session.
    pub fn snapshot(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every session change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }
}
