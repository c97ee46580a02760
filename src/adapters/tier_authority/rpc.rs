//! Tier authority adapter for the managed database's RPC endpoint.
//!
//! The entitlement check lives in the database as a stored function. It is
//! exposed over HTTP at `POST {base_url}/rest/v1/rpc/{function}` and answers
//! with a bare JSON boolean.
//!
//! ```text
//! POST /rest/v1/rpc/check_subscription_access
//! apikey: <key>
//! Authorization: Bearer <key>
//!
//! {"user_id": "u1", "required_tier": "applicant_professional"}
//!
//! 200 OK
//! true
//! ```
//!
//! No retries are attempted. The request timeout is the only local bound on
//! how long a route stays pending.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionTier;
use crate::ports::{TierAuthority, TierAuthorityError};

/// Configuration for [`RpcTierAuthority`].
#[derive(Debug, Clone)]
pub struct RpcTierAuthorityConfig {
    /// Project URL of the managed database (e.g. "https://xyz.example.co").
    pub base_url: String,
    api_key: SecretString,
    /// Name of the stored function performing the check.
    pub function: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RpcTierAuthorityConfig {
    /// Creates a configuration with the default function name and timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
            function: "check_subscription_access".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Uses a different stored function.
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.base_url.trim_end_matches('/'),
            self.function
        )
    }
}

#[derive(Debug, Serialize)]
struct CheckAccessRequest<'a> {
    user_id: &'a str,
    required_tier: String,
}

/// HTTP tier authority calling a stored function.
pub struct RpcTierAuthority {
    config: RpcTierAuthorityConfig,
    http_client: reqwest::Client,
}

impl RpcTierAuthority {
    /// Creates the adapter and its HTTP client.
    pub fn new(config: RpcTierAuthorityConfig) -> Result<Self, TierAuthorityError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                TierAuthorityError::unavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

fn parse_access_response(body: serde_json::Value) -> Result<bool, TierAuthorityError> {
    match body {
        serde_json::Value::Bool(has_access) => Ok(has_access),
        other => Err(TierAuthorityError::unexpected_response(other.to_string())),
    }
}

#[async_trait]
impl TierAuthority for RpcTierAuthority {
    async fn has_access(
        &self,
        user_id: &UserId,
        tier: &SubscriptionTier,
    ) -> Result<bool, TierAuthorityError> {
        let request = CheckAccessRequest {
            user_id: user_id.as_str(),
            required_tier: tier.to_string(),
        };
        let api_key = self.config.api_key.expose_secret();

        tracing::debug!(user_id = %user_id, tier = %tier, "Checking subscription access");

        let response = self
            .http_client
            .post(self.config.endpoint())
            .header("apikey", api_key)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TierAuthorityError::unavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TierAuthorityError::unavailable(format!(
                "Tier authority returned {}",
                status
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            TierAuthorityError::unexpected_response(format!("Invalid JSON body: {}", e))
        })?;

        parse_access_response(body)
    }
}

impl std::fmt::Debug for RpcTierAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcTierAuthority")
            .field("endpoint", &self.config.endpoint())
            .finish_non_exhaustive()
    }
}
