//! Salary breakdown from a foreign amount to a Brazilian net monthly salary.

use serde::{Deserialize, Serialize};

use super::{PayPeriod, SalaryError, WithholdingTable};

/// Input of a salary calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryInput {
    pub period: PayPeriod,
    pub amount: f64,
    pub hours_per_day: f64,
}

impl SalaryInput {
    /// Validates the numeric inputs.
    pub fn new(period: PayPeriod, amount: f64, hours_per_day: f64) -> Result<Self, SalaryError> {
        if !amount.is_finite() {
            return Err(SalaryError::InvalidAmount(amount.to_string()));
        }
        if !hours_per_day.is_finite() || hours_per_day <= 0.0 {
            return Err(SalaryError::InvalidHours(hours_per_day.to_string()));
        }
        Ok(Self {
            period,
            amount,
            hours_per_day,
        })
    }
}

/// Result of a salary calculation, serialized as the endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross annual amount in the source currency.
    pub annual_salary: f64,
    /// Gross monthly amount in the source currency.
    pub monthly_salary: f64,
    /// Gross monthly amount in the target currency.
    pub converted_salary: f64,
    /// Net monthly amount after withholding.
    pub calculated_salary: f64,
}

impl SalaryBreakdown {
    /// Annualizes the input, converts the monthly share at `rate` and applies
    /// withholding.
    pub fn compute(
        input: SalaryInput,
        rate: f64,
        table: &WithholdingTable,
    ) -> Result<Self, SalaryError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SalaryError::InvalidRate(rate));
        }

        let annual_salary = input.period.to_annual(input.amount, input.hours_per_day);
        let monthly_salary = annual_salary / 12.0;
        let converted_salary = rate * monthly_salary;

        Ok(Self {
            annual_salary,
            monthly_salary,
            converted_salary,
            calculated_salary: table.net(converted_salary),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USD_BRL: f64 = 4.2466225406;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn breakdown(period: PayPeriod, amount: f64) -> SalaryBreakdown {
        let input = SalaryInput::new(period, amount, 8.0).unwrap();
        SalaryBreakdown::compute(input, USD_BRL, &WithholdingTable::default()).unwrap()
    }

    fn assert_breakdown(actual: SalaryBreakdown, expected: [f64; 4]) {
        assert_close(actual.annual_salary, expected[0]);
        assert_close(actual.monthly_salary, expected[1]);
        assert_close(actual.converted_salary, expected[2]);
        assert_close(actual.calculated_salary, expected[3]);
    }

    #[test]
    fn annual_salary() {
        assert_breakdown(
            breakdown(PayPeriod::Annual, 70_000.0),
            [70_000.0, 5_833.333333333333, 24_771.964820166664, 18_415.47524462083],
        );
    }

    #[test]
    fn monthly_salary() {
        assert_breakdown(
            breakdown(PayPeriod::Monthly, 6_000.0),
            [72_000.0, 6_000.0, 25_479.7352436, 18_928.60880161],
        );
    }

    #[test]
    fn daily_salary() {
        assert_breakdown(
            breakdown(PayPeriod::Daily, 500.0),
            [120_000.0, 10_000.0, 42_466.225406, 31_243.81416935],
        );
    }

    #[test]
    fn hourly_salary() {
        assert_breakdown(
            breakdown(PayPeriod::Hourly, 60.0),
            [115_200.0, 9_600.0, 40_767.57638976, 30_012.293632576002],
        );
    }

    #[test]
    fn rejects_non_finite_amount() {
        let err = SalaryInput::new(PayPeriod::Daily, f64::NAN, 8.0).unwrap_err();
        assert!(matches!(err, SalaryError::InvalidAmount(_)));
    }

    #[test]
    fn rejects_non_positive_hours() {
        let err = SalaryInput::new(PayPeriod::Hourly, 10.0, 0.0).unwrap_err();
        assert!(matches!(err, SalaryError::InvalidHours(_)));
    }

    #[test]
    fn rejects_non_positive_rate() {
        let input = SalaryInput::new(PayPeriod::Annual, 1_000.0, 8.0).unwrap();
        let err = SalaryBreakdown::compute(input, 0.0, &WithholdingTable::default()).unwrap_err();
        assert!(matches!(err, SalaryError::InvalidRate(_)));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(breakdown(PayPeriod::Daily, 500.0)).unwrap();
        for field in [
            "annual_salary",
            "monthly_salary",
            "converted_salary",
            "calculated_salary",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }
}
