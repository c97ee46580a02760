//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid tier authority timeout")]
    InvalidTimeout,

    #[error("Invalid tier authority URL")]
    InvalidAuthorityUrl,

    #[error("Tier authority must use HTTPS in production")]
    AuthorityMustBeHttps,

    #[error("JWT secret too short (minimum 32 bytes)")]
    JwtSecretTooShort,

    #[error("Route path must start with '/': {0}")]
    InvalidRoutePath(&'static str),
}
