//! Hiring Portal - route-level access control for the recruiting platform
//!
//! Routes are gated by account role (`applicant` | `recruiter`) and by
//! subscription tier. A decision is evaluated in a fixed order (loading,
//! authentication, role, tier) and the only remote call is the tier check,
//! which fails closed.
//!
//! # Layout
//!
//! - `domain` - roles, principals, tiers, the plan catalog and decisions
//! - `ports` - `TierAuthority` and `SessionValidator` seams
//! - `application` - the access evaluator, route guard and session store
//! - `adapters` - JWT and RPC implementations, mocks, axum routes
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
