//! Salary calculator HTTP endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{CalculatorParams, ErrorResponse};
pub use handlers::{calculate_salary, heartbeat, SalaryApiError, SalaryAppState};
pub use routes::salary_routes;
