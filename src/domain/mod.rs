//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, roles, session, errors)
//! - `subscription` - Role-scoped subscription tiers and their catalog
//! - `access` - Access requirements and decisions

pub mod access;
pub mod foundation;
pub mod subscription;
