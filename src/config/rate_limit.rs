//! Per-client rate limit configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::rate_limiter::RegistryConfig;
use crate::domain::rate_limit::{BucketSettings, IdentityPolicy};

/// Rate limit configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Tokens added to each client's bucket per second
    #[serde(default = "default_refill_per_second")]
    pub refill_per_second: f64,

    /// Maximum tokens a client's bucket can hold
    #[serde(default = "default_burst")]
    pub burst: u32,

    /// Seconds between eviction sweeps
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    /// Seconds of inactivity after which a client is evicted
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// How peer addresses map to client identities
    #[serde(default)]
    pub identity: IdentityPolicy,

    /// Honor X-Forwarded-For / X-Real-IP (only behind a trusted proxy)
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl RateLimitConfig {
    /// Registry settings derived from this configuration
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig::new(BucketSettings::new(self.refill_per_second, self.burst))
            .with_sweep_interval(Duration::from_secs(self.sweep_interval_secs))
            .with_idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.refill_per_second.is_finite() || self.refill_per_second <= 0.0 {
            return Err(ValidationError::InvalidRefillRate);
        }
        if self.burst == 0 {
            return Err(ValidationError::InvalidBurst);
        }
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        if self.idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidIdleTimeout);
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            refill_per_second: default_refill_per_second(),
            burst: default_burst(),
            sweep_interval_secs: default_sweep_interval(),
            idle_timeout_secs: default_idle_timeout(),
            identity: IdentityPolicy::default(),
            trust_forwarded_headers: false,
        }
    }
}

fn default_refill_per_second() -> f64 {
    1.0
}

fn default_burst() -> u32 {
    5
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_idle_timeout() -> u64 {
    30
}
