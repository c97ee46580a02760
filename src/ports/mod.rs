//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TierAuthority` - Remote entitlement check for subscription tiers
//! - `SessionValidator` - Access token validation into a `Principal`

mod session_validator;
mod tier_authority;

pub use session_validator::SessionValidator;
pub use tier_authority::{TierAuthority, TierAuthorityError};
