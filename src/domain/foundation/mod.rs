//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, roles, session types, and error types
//! that form the vocabulary of the access-control path.

mod auth;
mod errors;
mod ids;
mod role;

pub use auth::{AuthError, Principal, SessionState};
pub use errors::ValidationError;
pub use ids::UserId;
pub use role::Role;
