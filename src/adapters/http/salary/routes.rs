//! HTTP routes for the salary calculator.

use axum::routing::get;
use axum::Router;

use super::handlers::{calculate_salary, heartbeat, SalaryAppState};

/// Creates the salary router, heartbeat included.
pub fn salary_routes(state: SalaryAppState) -> Router {
    Router::new()
        // GET /
        .route("/", get(heartbeat))
        // GET /salary/calculator?type=&from=&to=&amount=[&hours=]
        .route("/salary/calculator", get(calculate_salary))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticExchangeRateProvider;
    use crate::application::CalculateSalaryHandler;
    use crate::domain::salary::WithholdingTable;
    use crate::ports::ExchangeRateError;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(rates: StaticExchangeRateProvider) -> Router {
        let handler = CalculateSalaryHandler::new(Arc::new(rates), WithholdingTable::default());
        salary_routes(SalaryAppState::new(Arc::new(handler)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn heartbeat_returns_dot() {
        let app = router(StaticExchangeRateProvider::new());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b".");
    }

    #[tokio::test]
    async fn calculates_breakdown() {
        let app = router(StaticExchangeRateProvider::new().with_rate("USD", "BRL", 4.2466225406));
        let (status, json) =
            get_json(app, "/salary/calculator?type=daily&from=USD&to=BRL&amount=500").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["annual_salary"], 120000.0);
        assert_eq!(json["monthly_salary"], 10000.0);
        let net = json["calculated_salary"].as_f64().unwrap();
        assert!((net - 31243.81416935).abs() < 1e-6);
    }

    #[tokio::test]
    async fn missing_parameter_is_400() {
        let app = router(StaticExchangeRateProvider::new());
        let (status, json) = get_json(app, "/salary/calculator?type=daily&from=USD&to=BRL").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "Invalid request.");
        assert_eq!(json["error"], "Parameter 'amount' is required");
    }

    #[tokio::test]
    async fn zero_rate_is_502() {
        let app = router(StaticExchangeRateProvider::new().with_rate("USD", "BRL", 0.0));
        let (status, json) =
            get_json(app, "/salary/calculator?type=annual&from=USD&to=BRL&amount=1").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["status"], "Bad gateway.");
    }

    #[tokio::test]
    async fn upstream_failure_is_502() {
        let app = router(
            StaticExchangeRateProvider::new()
                .with_failure(ExchangeRateError::Upstream { status: 503 }),
        );
        let (status, json) =
            get_json(app, "/salary/calculator?type=annual&from=USD&to=BRL&amount=1").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["status"], "Bad gateway.");
    }
}
