//! Tier authority configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::tier_authority::RpcTierAuthorityConfig;

/// Remote subscription authority (database RPC endpoint)
#[derive(Debug, Clone, Deserialize)]
pub struct TierAuthorityConfig {
    /// Project base URL, e.g. `https://project.example.co`
    pub base_url: String,

    /// Service API key sent as `apikey` and bearer token
    pub api_key: SecretString,

    /// Name of the RPC function answering tier checks
    #[serde(default = "default_rpc_function")]
    pub rpc_function: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TierAuthorityConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Settings for the RPC adapter.
    pub fn rpc_config(&self) -> RpcTierAuthorityConfig {
        RpcTierAuthorityConfig::new(
            self.base_url.clone(),
            self.api_key.expose_secret().clone(),
        )
        .with_function(self.rpc_function.clone())
        .with_timeout(self.timeout())
    }

    /// Validate tier authority configuration
    ///
    /// In production, requires HTTPS for the base URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("TIER_AUTHORITY__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAuthorityUrl);
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("TIER_AUTHORITY__API_KEY"));
        }
        if self.rpc_function.is_empty() {
            return Err(ValidationError::MissingRequired("TIER_AUTHORITY__RPC_FUNCTION"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }

        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::AuthorityMustBeHttps);
        }

        Ok(())
    }
}

fn default_rpc_function() -> String {
    "check_subscription_access".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> TierAuthorityConfig {
        TierAuthorityConfig {
            base_url: base_url.to_string(),
            api_key: SecretString::new("service-key".to_string()),
            rpc_function: default_rpc_function(),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn test_timeout_duration() {
        assert_eq!(config("https://db.example.com").timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_missing_base_url() {
        assert_eq!(
            config("").validate(&Environment::Development),
            Err(ValidationError::MissingRequired("TIER_AUTHORITY__BASE_URL"))
        );
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        assert_eq!(
            config("db.example.com").validate(&Environment::Development),
            Err(ValidationError::InvalidAuthorityUrl)
        );
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = TierAuthorityConfig {
            timeout_secs: 0,
            ..config("https://db.example.com")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = config("http://localhost:54321");
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::AuthorityMustBeHttps)
        );
    }
}
