//! Access-control vocabulary shared by the evaluator and route guards.

mod decision;
mod requirement;

pub use decision::{AccessDecision, AccessReason};
pub use requirement::AccessRequirement;
