//! Request and response types for the salary calculator endpoint.

use serde::{Deserialize, Serialize};

/// Query string of `GET /salary/calculator`.
///
/// Every field is kept as raw text so missing and malformed values can be
/// reported per parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorParams {
    #[serde(rename = "type")]
    pub period: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
    pub hours: Option<String>,
}

/// Error envelope returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn invalid_request(error: impl Into<String>) -> Self {
        Self {
            status: "Invalid request.".to_string(),
            error: Some(error.into()),
        }
    }

    pub fn bad_gateway(error: impl Into<String>) -> Self {
        Self {
            status: "Bad gateway.".to_string(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::invalid_request(
            "Parameter 'type' is required",
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "Invalid request.",
                "error": "Parameter 'type' is required"
            })
        );
    }

    #[test]
    fn params_read_type_field() {
        let params: CalculatorParams =
            serde_json::from_value(serde_json::json!({"type": "daily", "amount": "10"})).unwrap();
        assert_eq!(params.period.as_deref(), Some("daily"));
        assert_eq!(params.amount.as_deref(), Some("10"));
        assert!(params.hours.is_none());
    }
}
