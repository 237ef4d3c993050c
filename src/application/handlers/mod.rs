//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod calculate_salary;

pub use calculate_salary::{CalculateSalaryError, CalculateSalaryHandler, CalculateSalaryQuery};
