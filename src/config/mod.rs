//! Environment-driven configuration
//!
//! Every setting is read from `HIRING_PORTAL__<SECTION>__<KEY>` variables,
//! optionally seeded from a `.env` file. Sections:
//!
//! | Section          | Required keys             |
//! |------------------|---------------------------|
//! | `server`         | none                      |
//! | `auth`           | `JWT_SECRET`              |
//! | `tier_authority` | `BASE_URL`, `API_KEY`     |
//! | `routes`         | none                      |
//!
//! ```no_run
//! use hiring_portal::config::AppConfig;
//!
//! # fn main() -> Result<(), hiring_portal::config::ConfigError> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod error;
mod routes;
mod server;
mod tier_authority;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use routes::RoutesConfig;
pub use server::{Environment, ServerConfig};
pub use tier_authority::TierAuthorityConfig;

use serde::Deserialize;

const ENV_PREFIX: &str = "HIRING_PORTAL";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub tier_authority: TierAuthorityConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    ///
    /// Fails when a required key is missing or a value does not parse.
    /// Semantic checks live in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section. The environment decides whether the tier
    /// authority may be reached over plain HTTP.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.tier_authority.validate(&self.server.environment)?;
        self.routes.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
