//! Shared-secret JWT adapter for the managed auth service.
//!
//! The auth service signs access tokens with HS256 using the project's JWT
//! secret. This adapter implements the `SessionValidator` port by:
//!
//! 1. Verifying the signature against the shared secret
//! 2. Validating audience and expiry claims
//! 3. Reading the account role from `user_metadata.role`
//! 4. Mapping claims to the domain `Principal` type
//!
//! The top-level `role` claim is the database role (`authenticated`) and is
//! not the account role.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Principal, Role, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT session validator.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    secret: SecretString,
    /// Expected audience claim.
    pub audience: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            audience: audience.into(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    role: Option<String>,
}

/// Access token claims used by the platform.
#[derive(Debug, Serialize, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    exp: i64,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

/// Validates HS256 access tokens and extracts the principal.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::warn!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        let role: Role = claims
            .user_metadata
            .role
            .as_deref()
            .ok_or(AuthError::MissingRole)?
            .parse()
            .map_err(|e| {
                tracing::warn!(user_id = %user_id, "Unrecognised role in token: {}", e);
                AuthError::MissingRole
            })?;

        Ok(Principal::new(user_id, role, claims.email))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("audience", &self.validation.aud)
            .finish_non_exhaustive()
    }
}
