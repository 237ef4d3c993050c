//! Exchange rate API configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Exchange rate API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateConfig {
    /// Endpoint returning the latest rates
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key, sent as the `api_key` query parameter when present
    #[serde(default)]
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ExchangeRateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate exchange rate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ValidationError::InvalidExchangeRateUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidExchangeRateTimeout);
        }
        Ok(())
    }
}

impl Default for ExchangeRateConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.exchangeratesapi.io/latest".to_string()
}

fn default_timeout() -> u64 {
    10
}
