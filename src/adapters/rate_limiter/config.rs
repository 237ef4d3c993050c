//! Registry configuration.

use std::time::Duration;

use crate::domain::rate_limit::BucketSettings;

/// Configuration for the client limiter registry.
///
/// | Setting | Default | Description |
/// |---------|---------|-------------|
/// | `bucket` | 1 token/s, burst 5 | Settings for every new bucket |
/// | `sweep_interval` | 60s | Time between eviction passes |
/// | `idle_timeout` | 30s | Inactivity after which a client is evicted |
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub bucket: BucketSettings,
    pub sweep_interval: Duration,
    pub idle_timeout: Duration,
}

impl RegistryConfig {
    pub fn new(bucket: BucketSettings) -> Self {
        Self {
            bucket,
            ..Self::default()
        }
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            bucket: BucketSettings::new(1.0, 5),
            sweep_interval: Duration::from_secs(60),
            idle_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_evict_after_half_a_sweep() {
        let config = RegistryConfig::default();
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
        assert_eq!(config.idle_timeout, Duration::from_secs(30));
        assert!(config.idle_timeout < config.sweep_interval);
    }

    #[test]
    fn builders_override_timings() {
        let config = RegistryConfig::new(BucketSettings::new(2.0, 3))
            .with_sweep_interval(Duration::from_secs(5))
            .with_idle_timeout(Duration::from_secs(2));
        assert_eq!(config.bucket.burst, 3);
        assert_eq!(config.sweep_interval, Duration::from_secs(5));
        assert_eq!(config.idle_timeout, Duration::from_secs(2));
    }
}
