//! Brazilian statutory withholding (INSS and IRRF).

use serde::{Deserialize, Serialize};

/// Withholding parameters applied to a converted monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WithholdingTable {
    /// IRRF marginal rate.
    pub irrf_rate: f64,
    /// IRRF deduction for the bracket.
    pub irrf_deduction: f64,
    /// Flat INSS contribution.
    pub inss: f64,
    /// Deduction per dependent.
    pub dependent_deduction: f64,
}

impl Default for WithholdingTable {
    fn default() -> Self {
        Self {
            irrf_rate: 0.275,
            irrf_deduction: 869.36,
            inss: 642.34,
            dependent_deduction: 189.59,
        }
    }
}

impl WithholdingTable {
    /// Income tax withheld from a monthly gross amount.
    pub fn irrf(&self, gross: f64) -> f64 {
        (gross - self.dependent_deduction - self.inss) * self.irrf_rate - self.irrf_deduction
    }

    /// Monthly amount left after INSS and IRRF.
    pub fn net(&self, gross: f64) -> f64 {
        gross - self.inss - self.irrf(gross)
    }
}
