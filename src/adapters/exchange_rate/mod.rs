//! Exchange rate adapters.
//!
//! - `HttpExchangeRateProvider` - Third-party HTTP API (production)
//! - `StaticExchangeRateProvider` - Fixed rates for tests and offline runs

mod http_provider;
mod static_provider;

pub use http_provider::{HttpExchangeRateConfig, HttpExchangeRateProvider};
pub use static_provider::StaticExchangeRateProvider;
