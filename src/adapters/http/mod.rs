//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod portal;

pub use portal::{portal_router, PortalAppState};
