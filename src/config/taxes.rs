//! Withholding table configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::salary::WithholdingTable;

/// Brazilian withholding parameters
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    #[serde(default = "default_irrf_rate")]
    pub irrf_rate: f64,

    #[serde(default = "default_irrf_deduction")]
    pub irrf_deduction: f64,

    #[serde(default = "default_inss")]
    pub inss: f64,

    #[serde(default = "default_dependent_deduction")]
    pub dependent_deduction: f64,
}

impl TaxConfig {
    pub fn withholding_table(&self) -> WithholdingTable {
        WithholdingTable {
            irrf_rate: self.irrf_rate,
            irrf_deduction: self.irrf_deduction,
            inss: self.inss,
            dependent_deduction: self.dependent_deduction,
        }
    }

    /// Validate withholding parameters
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.irrf_rate) {
            return Err(ValidationError::InvalidIrrfRate);
        }
        let amounts = [self.irrf_deduction, self.inss, self.dependent_deduction];
        if amounts.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ValidationError::NegativeWithholding);
        }
        Ok(())
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            irrf_rate: default_irrf_rate(),
            irrf_deduction: default_irrf_deduction(),
            inss: default_inss(),
            dependent_deduction: default_dependent_deduction(),
        }
    }
}

fn default_irrf_rate() -> f64 {
    WithholdingTable::default().irrf_rate
}

fn default_irrf_deduction() -> f64 {
    WithholdingTable::default().irrf_deduction
}

fn default_inss() -> f64 {
    WithholdingTable::default().inss
}

fn default_dependent_deduction() -> f64 {
    WithholdingTable::default().dependent_deduction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_table() {
        let config = TaxConfig::default();
        assert_eq!(config.withholding_table(), WithholdingTable::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rate_out_of_range() {
        let config = TaxConfig {
            irrf_rate: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidIrrfRate));
    }

    #[test]
    fn test_validation_negative_amount() {
        let config = TaxConfig {
            inss: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NegativeWithholding));
    }
}
