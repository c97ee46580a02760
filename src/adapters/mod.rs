//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (JWT, mock)
//! - `tier_authority` - Subscription tier checks (RPC endpoint, mock)
//! - `http` - axum routes and middleware

pub mod auth;
pub mod http;
pub mod tier_authority;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use tier_authority::{MockTierAuthority, RpcTierAuthority, RpcTierAuthorityConfig};
