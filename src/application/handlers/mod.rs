//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the ports.

pub mod access;
pub mod session;
