//! Integration tests for the portal HTTP surface.
//!
//! Drive the full router (auth layer, per-route access layers and handlers)
//! with mock session validation and a mock tier authority.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hiring_portal::adapters::http::{portal_router, PortalAppState};
use hiring_portal::adapters::{MockSessionValidator, MockTierAuthority};
use hiring_portal::application::{AccessEvaluator, Destinations};
use hiring_portal::domain::foundation::{Role, UserId};
use hiring_portal::domain::subscription::SubscriptionTier;
use hiring_portal::ports::TierAuthorityError;

// ════════════════════════════════════════════════════════════════════════════════
// Test Helpers
// ════════════════════════════════════════════════════════════════════════════════

const APPLICANT_TOKEN: &str = "applicant-token";
const RECRUITER_TOKEN: &str = "recruiter-token";

fn tier(s: &str) -> SubscriptionTier {
    s.parse().unwrap()
}

fn validator() -> MockSessionValidator {
    MockSessionValidator::new()
        .with_test_user(APPLICANT_TOKEN, "u1", Role::Applicant)
        .unwrap()
        .with_test_user(RECRUITER_TOKEN, "r1", Role::Recruiter)
        .unwrap()
}

fn app_with(authority: Arc<MockTierAuthority>) -> Router {
    let state = PortalAppState::new(
        Arc::new(AccessEvaluator::new(authority)),
        Destinations::default(),
    );
    portal_router(state, Arc::new(validator()))
}

fn app(authority: MockTierAuthority) -> Router {
    app_with(Arc::new(authority))
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

// ════════════════════════════════════════════════════════════════════════════════
// Open Endpoints
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_returns_ok_without_token() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn tier_lookup_returns_catalog_entry() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/api/tiers/applicant_professional", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["display_name"], "Professional");
    assert_eq!(body["features"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn tier_lookup_degrades_for_unknown_tier() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/api/tiers/applicant_ultra", None))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["display_name"], "ultra");
    assert!(body["features"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn access_endpoint_reports_role_mismatch() {
    let response = app(MockTierAuthority::new())
        .oneshot(get(
            "/api/access?required_role=recruiter&location=%2Frecruiter%2Fanalytics",
            Some(APPLICANT_TOKEN),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["allowed"], false);
    assert_eq!(body["reason"], "role-mismatch");
    assert_eq!(body["guard"]["outcome"], "redirect");
    assert_eq!(body["guard"]["to"], "/applicant/dashboard");
    assert!(body["guard"]["return_to"].is_null());
}

#[tokio::test]
async fn access_endpoint_rejects_malformed_tier() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/api/access?required_tier=premium", Some(APPLICANT_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ════════════════════════════════════════════════════════════════════════════════
// Authentication
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn anonymous_request_redirects_to_sign_in_with_return_path() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/recruiter/jobs/new", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth?redirect=%2Frecruiter%2Fjobs%2Fnew");
}

#[tokio::test]
async fn invalid_token_is_rejected_before_guard() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/applicant/dashboard", Some("forged")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["code"], "AUTH_ERROR");
}

// ════════════════════════════════════════════════════════════════════════════════
// Role Checks
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn applicant_sees_own_dashboard() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/applicant/dashboard", Some(APPLICANT_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["page"], "applicant_dashboard");
    assert_eq!(body["user_id"], "u1");
}

#[tokio::test]
async fn applicant_on_recruiter_page_is_sent_home() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/recruiter/jobs/new", Some(APPLICANT_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/applicant/dashboard");
}

#[tokio::test]
async fn recruiter_on_applicant_page_is_sent_home() {
    let response = app(MockTierAuthority::new())
        .oneshot(get("/applicant/insights", Some(RECRUITER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/recruiter/dashboard");
}

// ════════════════════════════════════════════════════════════════════════════════
// Tier Checks
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn premium_applicant_reaches_insights() {
    let authority = MockTierAuthority::new()
        .with_subscription(UserId::new("u1").unwrap(), tier("applicant_premium"));

    let response = app(authority)
        .oneshot(get("/applicant/insights", Some(APPLICANT_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["page"], "applicant_insights");
}

#[tokio::test]
async fn starter_applicant_gets_upgrade_prompt() {
    let authority = MockTierAuthority::new()
        .with_subscription(UserId::new("u1").unwrap(), tier("applicant_starter"));

    let response = app(authority)
        .oneshot(get("/applicant/insights", Some(APPLICANT_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["code"], "UPGRADE_REQUIRED");
    assert_eq!(body["tier"], "applicant_premium");
    assert_eq!(body["display_name"], "Premium");
    assert_eq!(body["features"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn authority_failure_fails_closed() {
    let authority = Arc::new(
        MockTierAuthority::new()
            .with_subscription(UserId::new("r1").unwrap(), tier("recruiter_enterprise"))
            .with_error(TierAuthorityError::unavailable("connection reset")),
    );

    let response = app_with(authority.clone())
        .oneshot(get("/recruiter/analytics", Some(RECRUITER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["display_name"], "Professional");
    assert_eq!(authority.call_count(), 1);
}

#[tokio::test]
async fn role_mismatch_never_calls_authority() {
    let authority = Arc::new(MockTierAuthority::new());

    let response = app_with(authority.clone())
        .oneshot(get("/recruiter/analytics", Some(APPLICANT_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(authority.call_count(), 0);
}

#[tokio::test]
async fn role_only_pages_never_call_authority() {
    let authority = Arc::new(MockTierAuthority::new());

    let response = app_with(authority.clone())
        .oneshot(get("/recruiter/dashboard", Some(RECRUITER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(authority.call_count(), 0);
}
