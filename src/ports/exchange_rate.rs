//! Exchange rate port for live currency conversion.
//!
//! The salary calculation needs the price of one unit of the source currency
//! in the target currency. Implementations call a third-party API in
//! production and return fixed rates in tests.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Source and target currency of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: String,
    pub target: String,
}

impl CurrencyPair {
    /// Creates a pair, normalizing both codes to upper case.
    pub fn new(base: &str, target: &str) -> Self {
        Self {
            base: base.trim().to_ascii_uppercase(),
            target: target.trim().to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.target)
    }
}

/// Port for exchange rate lookups.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Units of `pair.target` per one unit of `pair.base`.
    async fn rate(&self, pair: &CurrencyPair) -> Result<f64, ExchangeRateError>;
}

/// Errors that can occur while fetching an exchange rate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExchangeRateError {
    /// The provider has no rate for the requested currency.
    #[error("no exchange rate for {0}")]
    UnknownCurrency(String),

    /// The provider answered with a non-success status.
    #[error("could not request the rate: upstream returned {status}")]
    Upstream { status: u16 },

    /// The request did not complete in time.
    #[error("exchange rate request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection-level failure.
    #[error("exchange rate network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("invalid exchange rate response: {0}")]
    InvalidResponse(String),
}

impl ExchangeRateError {
    /// True when the failure lies with the caller's input rather than the
    /// upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExchangeRateError::UnknownCurrency(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_normalizes_codes() {
        let pair = CurrencyPair::new(" usd", "brl ");
        assert_eq!(pair.base, "USD");
        assert_eq!(pair.target, "BRL");
        assert_eq!(pair.to_string(), "USD/BRL");
    }

    #[test]
    fn only_unknown_currency_is_client_error() {
        assert!(ExchangeRateError::UnknownCurrency("ABCD".into()).is_client_error());
        assert!(!ExchangeRateError::Upstream { status: 503 }.is_client_error());
        assert!(!ExchangeRateError::Network("refused".into()).is_client_error());
    }
}
