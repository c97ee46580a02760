//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::auth::JwtConfig;

/// Authentication configuration (shared-secret access tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret the auth service signs access tokens with
    pub jwt_secret: SecretString,

    /// Expected audience for tokens
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Settings for the JWT session validator.
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::new(self.jwt_secret.expose_secret().clone(), self.audience.clone())
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }
        Ok(())
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}
