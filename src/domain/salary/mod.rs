//! Salary domain - pay periods, withholding, and the computed breakdown.

mod breakdown;
mod pay_period;
mod withholding;

pub use breakdown::{SalaryBreakdown, SalaryInput};
pub use pay_period::{PayPeriod, DEFAULT_HOURS_PER_DAY, WORKING_DAYS_PER_MONTH};
pub use withholding::WithholdingTable;

use thiserror::Error;

/// Errors raised while validating or computing a salary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalaryError {
    #[error("{0} is not a valid value")]
    InvalidPayPeriod(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid hours per day: {0}")]
    InvalidHours(String),

    #[error("invalid exchange rate: {0}")]
    InvalidRate(f64),
}
