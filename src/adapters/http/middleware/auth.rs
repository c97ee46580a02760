//! Bearer-token authentication for axum.
//!
//! `auth_middleware` runs on every request. A valid token puts the caller's
//! `Principal` into the request extensions; a missing token leaves them empty
//! so route guards can redirect; a bad token ends the request with 401.
//!
//! ```text
//! Request → auth_middleware → Principal in extensions
//!                                      ↓
//!                  require_access / RequireAuth read from extensions
//! ```
//!
//! Handlers behind a guard pull the principal with [`RequireAuth`]; open
//! handlers use [`OptionalAuth`].

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, Principal};
use crate::ports::SessionValidator;

/// State of [`auth_middleware`].
pub type AuthState = Arc<dyn SessionValidator>;

/// Token from an `Authorization: Bearer <token>` header. The scheme is
/// matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn auth_error_response(error: &AuthError) -> Response {
    let status = match error {
        AuthError::ServiceUnavailable(message) => {
            tracing::error!(error = %message, "Session validation unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
        AuthError::InvalidToken
        | AuthError::TokenExpired
        | AuthError::MissingRole
        | AuthError::Superseded => {
            tracing::debug!(error = %error, "Rejected access token");
            StatusCode::UNAUTHORIZED
        }
    };

    (
        status,
        Json(serde_json::json!({
            "error": error.to_string(),
            "code": "AUTH_ERROR",
            "reauthenticate": error.requires_reauthentication(),
        })),
    )
        .into_response()
}

/// Validates the bearer token, if any, and injects the `Principal`.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(principal) => {
            tracing::debug!(user_id = %principal.id, role = %principal.role, "Authenticated request");
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(error) => auth_error_response(&error),
    }
}

/// Extractor for handlers that need a signed-in caller; 401 otherwise.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor that never rejects; `None` for anonymous callers.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<Principal>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<Principal>().cloned()))
    }
}

#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "error": "Authentication required",
                    "code": "UNAUTHENTICATED"
                })),
            )
                .into_response(),
        }
    }
}
