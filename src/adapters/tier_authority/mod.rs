//! Tier authority adapters.
//!
//! - `rpc` - Production adapter calling the database's RPC endpoint
//! - `mock` - In-memory implementation for tests

mod mock;
mod rpc;

pub use mock::MockTierAuthority;
pub use rpc::{RpcTierAuthority, RpcTierAuthorityConfig};
