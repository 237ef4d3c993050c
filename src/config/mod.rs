//! Service configuration.
//!
//! Values come from `SALARY_CALCULATOR__<SECTION>__<KEY>` environment
//! variables (a `.env` file is read first when present). Every section has
//! defaults, so an empty environment yields a working local setup.
//!
//! ```no_run
//! use salary_calculator::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("listening on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod error;
mod exchange_rate;
mod rate_limit;
mod server;
mod taxes;

pub use error::{ConfigError, ValidationError};
pub use exchange_rate::ExchangeRateConfig;
pub use rate_limit::RateLimitConfig;
pub use server::{Environment, ServerConfig};
pub use taxes::TaxConfig;

use serde::Deserialize;

const ENV_PREFIX: &str = "SALARY_CALCULATOR";
const ENV_SEPARATOR: &str = "__";

/// Root configuration, one field per section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub exchange_rate: ExchangeRateConfig,
    pub taxes: TaxConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `SALARY_CALCULATOR__RATE_LIMIT__BURST=10` sets `rate_limit.burst`. A
    /// bare `PORT` variable, as set by most container platforms, takes
    /// precedence over `server.port`.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let port_override = std::env::var("PORT").ok();
        let loaded = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .set_override_option("server.port", port_override)?
            .build()?;

        Ok(loaded.try_deserialize()?)
    }

    /// Semantic checks, section by section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.rate_limit.validate()?;
        self.exchange_rate.validate()?;
        self.taxes.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
