//! HTTP adapter for the portal's pages and access endpoints.
//!
//! Guarded pages:
//! - `GET /applicant/dashboard` - applicant home
//! - `GET /applicant/insights` - premium applicant insights (`applicant_premium`)
//! - `GET /recruiter/dashboard` - recruiter home
//! - `GET /recruiter/jobs/new` - job posting wizard
//! - `GET /recruiter/analytics` - recruiter analytics (`recruiter_professional`)
//!
//! Open endpoints:
//! - `GET /health` - liveness probe
//! - `GET /api/access` - evaluate a requirement for the caller
//! - `GET /api/tiers` - list plan presentations
//! - `GET /api/tiers/:identifier` - presentation of a single plan

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::PortalAppState;
pub use routes::portal_router;
