//! Static exchange rate provider for testing and offline runs.
//!
//! # Example
//!
//! ```ignore
//! let provider = StaticExchangeRateProvider::new()
//!     .with_rate("USD", "BRL", 4.2466225406)
//!     .with_failure(ExchangeRateError::Upstream { status: 503 });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::ports::{CurrencyPair, ExchangeRateError, ExchangeRateProvider};

/// Provider answering from a fixed table of rates.
#[derive(Debug, Clone, Default)]
pub struct StaticExchangeRateProvider {
    rates: HashMap<CurrencyPair, f64>,
    failure: Option<ExchangeRateError>,
    calls: Arc<AtomicUsize>,
}

impl StaticExchangeRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, base: &str, target: &str, rate: f64) -> Self {
        self.rates.insert(CurrencyPair::new(base, target), rate);
        self
    }

    /// Makes every lookup fail with `error`.
    pub fn with_failure(mut self, error: ExchangeRateError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Number of lookups served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExchangeRateProvider for StaticExchangeRateProvider {
    async fn rate(&self, pair: &CurrencyPair) -> Result<f64, ExchangeRateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref error) = self.failure {
            return Err(error.clone());
        }
        self.rates
            .get(pair)
            .copied()
            .ok_or_else(|| ExchangeRateError::UnknownCurrency(pair.target.clone()))
    }
}
