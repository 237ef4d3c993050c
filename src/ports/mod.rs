//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ClientRateLimiter` - Per-client token bucket registry
//! - `ExchangeRateProvider` - Live currency conversion rates

mod exchange_rate;
mod rate_limiter;

pub use exchange_rate::{CurrencyPair, ExchangeRateError, ExchangeRateProvider};
pub use rate_limiter::ClientRateLimiter;
