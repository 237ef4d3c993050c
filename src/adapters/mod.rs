//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `rate_limiter` - In-memory per-client token bucket registry
//! - `exchange_rate` - Exchange rate API clients
//! - `http` - REST API and middleware (axum)

pub mod exchange_rate;
pub mod http;
pub mod rate_limiter;

pub use exchange_rate::{HttpExchangeRateProvider, StaticExchangeRateProvider};
pub use rate_limiter::{ClientLimiterRegistry, RegistryConfig};
