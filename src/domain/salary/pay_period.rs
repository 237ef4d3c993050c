//! Pay period of the salary amount supplied by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SalaryError;

/// Working days per month used to turn a daily rate into a monthly one.
pub const WORKING_DAYS_PER_MONTH: f64 = 20.0;

/// Default hours per working day for hourly rates.
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// The period an amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    Annual,
    Monthly,
    Daily,
    Hourly,
}

impl PayPeriod {
    pub const ALL: [PayPeriod; 4] = [
        PayPeriod::Annual,
        PayPeriod::Monthly,
        PayPeriod::Daily,
        PayPeriod::Hourly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Annual => "annual",
            PayPeriod::Monthly => "monthly",
            PayPeriod::Daily => "daily",
            PayPeriod::Hourly => "hourly",
        }
    }

    /// Converts `amount` in this period into an annual amount.
    pub fn to_annual(&self, amount: f64, hours_per_day: f64) -> f64 {
        match self {
            PayPeriod::Annual => amount,
            PayPeriod::Monthly => amount * 12.0,
            PayPeriod::Daily => PayPeriod::Monthly.to_annual(amount * WORKING_DAYS_PER_MONTH, hours_per_day),
            PayPeriod::Hourly => PayPeriod::Daily.to_annual(amount * hours_per_day, hours_per_day),
        }
    }
}

impl FromStr for PayPeriod {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayPeriod::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| SalaryError::InvalidPayPeriod(s.to_string()))
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_period() {
        for period in PayPeriod::ALL {
            assert_eq!(period.as_str().parse::<PayPeriod>().unwrap(), period);
        }
    }

    #[test]
    fn rejects_unknown_period() {
        let err = "daly".parse::<PayPeriod>().unwrap_err();
        assert_eq!(err.to_string(), "daly is not a valid value");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Annual".parse::<PayPeriod>().is_err());
    }

    #[test]
    fn annualizes_each_period() {
        assert_eq!(PayPeriod::Annual.to_annual(70_000.0, 8.0), 70_000.0);
        assert_eq!(PayPeriod::Monthly.to_annual(6_000.0, 8.0), 72_000.0);
        assert_eq!(PayPeriod::Daily.to_annual(500.0, 8.0), 120_000.0);
        assert_eq!(PayPeriod::Hourly.to_annual(60.0, 8.0), 115_200.0);
    }

    #[test]
    fn hourly_uses_hours_per_day() {
        assert_eq!(PayPeriod::Hourly.to_annual(50.0, 6.0), 72_000.0);
    }
}
