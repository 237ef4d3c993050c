//! CalculateSalaryHandler - Query handler converting a foreign salary into a
//! Brazilian net monthly salary.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::salary::{SalaryBreakdown, SalaryError, SalaryInput, WithholdingTable};
use crate::ports::{CurrencyPair, ExchangeRateError, ExchangeRateProvider};

/// Query to calculate a salary breakdown.
#[derive(Debug, Clone)]
pub struct CalculateSalaryQuery {
    /// Validated period, amount and working hours.
    pub input: SalaryInput,
    /// Source and target currency.
    pub pair: CurrencyPair,
}

/// Errors returned by [`CalculateSalaryHandler`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculateSalaryError {
    #[error(transparent)]
    Salary(#[from] SalaryError),

    #[error(transparent)]
    ExchangeRate(#[from] ExchangeRateError),
}

/// Handler for salary calculations.
pub struct CalculateSalaryHandler {
    rates: Arc<dyn ExchangeRateProvider>,
    withholding: WithholdingTable,
}

impl CalculateSalaryHandler {
    pub fn new(rates: Arc<dyn ExchangeRateProvider>, withholding: WithholdingTable) -> Self {
        Self { rates, withholding }
    }

    pub async fn handle(
        &self,
        query: CalculateSalaryQuery,
    ) -> Result<SalaryBreakdown, CalculateSalaryError> {
        let rate = self.rates.rate(&query.pair).await?;
        let breakdown = SalaryBreakdown::compute(query.input, rate, &self.withholding)
            .map_err(|err| match err {
                // An unusable rate is the provider's fault, not the caller's.
                SalaryError::InvalidRate(rate) => CalculateSalaryError::ExchangeRate(
                    ExchangeRateError::InvalidResponse(format!("unusable exchange rate {}", rate)),
                ),
                other => other.into(),
            })?;

        tracing::debug!(
            pair = %query.pair,
            period = %query.input.period,
            rate,
            "Salary calculated"
        );
        Ok(breakdown)
    }
}
