//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Authentication middleware and extractors
//! - `access` - Per-route role and subscription tier enforcement

pub mod access;
pub mod auth;

pub use access::{outcome_response, redirect_location, require_access, AccessPolicy};
pub use auth::{auth_middleware, AuthRejection, AuthState, OptionalAuth, RequireAuth};
