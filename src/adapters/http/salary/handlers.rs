//! HTTP handlers for the salary calculator.
//!
//! These handlers parse the raw query string, call the application layer and
//! map its errors onto the `{"status", "error"}` envelope.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{CalculateSalaryError, CalculateSalaryHandler, CalculateSalaryQuery};
use crate::domain::salary::{PayPeriod, SalaryBreakdown, SalaryInput, DEFAULT_HOURS_PER_DAY};
use crate::ports::CurrencyPair;

use super::dto::{CalculatorParams, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Salary API error that implements IntoResponse.
#[derive(Debug, Clone, PartialEq)]
pub enum SalaryApiError {
    BadRequest(String),
    BadGateway(String),
}

impl SalaryApiError {
    fn missing(name: &str) -> Self {
        SalaryApiError::BadRequest(format!("Parameter '{}' is required", name))
    }

    fn not_a_number(name: &str, value: &str) -> Self {
        SalaryApiError::BadRequest(format!("Parameter '{}' must be a number, got '{}'", name, value))
    }
}

impl IntoResponse for SalaryApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            SalaryApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::invalid_request(msg))
            }
            SalaryApiError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<CalculateSalaryError> for SalaryApiError {
    fn from(error: CalculateSalaryError) -> Self {
        match error {
            CalculateSalaryError::Salary(err) => SalaryApiError::BadRequest(err.to_string()),
            CalculateSalaryError::ExchangeRate(err) if err.is_client_error() => {
                SalaryApiError::BadRequest(err.to_string())
            }
            CalculateSalaryError::ExchangeRate(err) => {
                tracing::warn!(error = %err, "Exchange rate lookup failed");
                SalaryApiError::BadGateway(err.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// State shared by the salary routes.
#[derive(Clone)]
pub struct SalaryAppState {
    pub handler: Arc<CalculateSalaryHandler>,
}

impl SalaryAppState {
    pub fn new(handler: Arc<CalculateSalaryHandler>) -> Self {
        Self { handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /salary/calculator
pub async fn calculate_salary(
    State(state): State<SalaryAppState>,
    Query(params): Query<CalculatorParams>,
) -> Result<Json<SalaryBreakdown>, SalaryApiError> {
    let query = parse_query(&params)?;
    let breakdown = state.handler.handle(query).await?;
    Ok(Json(breakdown))
}

/// GET /
pub async fn heartbeat() -> &'static str {
    "."
}

fn parse_query(params: &CalculatorParams) -> Result<CalculateSalaryQuery, SalaryApiError> {
    let period = required("type", &params.period)?
        .parse::<PayPeriod>()
        .map_err(|err| SalaryApiError::BadRequest(err.to_string()))?;
    let from = required("from", &params.from)?;
    let to = required("to", &params.to)?;
    let amount = parse_number("amount", required("amount", &params.amount)?)?;
    let hours = match present(&params.hours) {
        Some(hours) => parse_number("hours", hours)?,
        None => DEFAULT_HOURS_PER_DAY,
    };

    let input = SalaryInput::new(period, amount, hours)
        .map_err(|err| SalaryApiError::BadRequest(err.to_string()))?;

    Ok(CalculateSalaryQuery {
        input,
        pair: CurrencyPair::new(from, to),
    })
}

/// Empty values count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(name: &str, value: &'a Option<String>) -> Result<&'a str, SalaryApiError> {
    present(value).ok_or_else(|| SalaryApiError::missing(name))
}

fn parse_number(name: &str, value: &str) -> Result<f64, SalaryApiError> {
    value
        .parse::<f64>()
        .map_err(|_| SalaryApiError::not_a_number(name, value))
}
