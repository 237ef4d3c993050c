//! Rate limiter adapters.
//!
//! Implementation of the `ClientRateLimiter` port.
//!
//! ## Usage
//!
//! ```ignore
//! use salary_calculator::adapters::rate_limiter::{ClientLimiterRegistry, RegistryConfig};
//!
//! let registry = Arc::new(ClientLimiterRegistry::new(RegistryConfig::default()));
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! tokio::spawn({
//!     let registry = registry.clone();
//!     async move { registry.run_sweeper(shutdown_rx).await }
//! });
//! ```

mod config;
mod in_memory;

pub use config::RegistryConfig;
pub use in_memory::ClientLimiterRegistry;
