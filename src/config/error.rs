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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Refill rate must be a positive number")]
    InvalidRefillRate,

    #[error("Burst must be at least 1")]
    InvalidBurst,

    #[error("Sweep interval must be at least one second")]
    InvalidSweepInterval,

    #[error("Idle timeout must be at least one second")]
    InvalidIdleTimeout,

    #[error("Invalid exchange rate API URL")]
    InvalidExchangeRateUrl,

    #[error("Invalid exchange rate timeout")]
    InvalidExchangeRateTimeout,

    #[error("IRRF rate must be between 0 and 1")]
    InvalidIrrfRate,

    #[error("Withholding amounts must be non-negative")]
    NegativeWithholding,
}
