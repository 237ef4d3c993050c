//! HTTP exchange rate provider.
//!
//! Queries an exchangeratesapi-style endpoint:
//!
//! ```text
//! GET {base_url}?base=USD&symbols=BRL[&api_key=...]
//! ```
//!
//! Two response shapes are accepted: the wrapped form
//! `{"meta": {...}, "response": {"rates": {...}, "base": ..., "date": ...}}`
//! and the flat legacy form `{"rates": {...}, "base": ..., "date": ...}`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::ExchangeRateConfig;
use crate::ports::{CurrencyPair, ExchangeRateError, ExchangeRateProvider};

/// Configuration for the HTTP provider.
#[derive(Debug, Clone)]
pub struct HttpExchangeRateConfig {
    /// Endpoint returning the latest rates.
    pub base_url: String,
    /// Optional API key.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpExchangeRateConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ExchangeRateConfig> for HttpExchangeRateConfig {
    fn from(config: &ExchangeRateConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Exchange rate provider backed by a third-party HTTP API.
pub struct HttpExchangeRateProvider {
    config: HttpExchangeRateConfig,
    client: Client,
}

impl HttpExchangeRateProvider {
    /// Creates a provider, building its HTTP client.
    pub fn new(config: HttpExchangeRateConfig) -> Result<Self, ExchangeRateError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExchangeRateError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn query(&self, pair: &CurrencyPair) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(ref key) = self.config.api_key {
            query.push(("api_key", key.expose_secret().clone()));
        }
        query.push(("base", pair.base.clone()));
        query.push(("symbols", pair.target.clone()));
        query
    }

    fn map_send_error(&self, e: reqwest::Error) -> ExchangeRateError {
        if e.is_timeout() {
            ExchangeRateError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ExchangeRateError::Network(format!("Connection failed: {}", e))
        } else {
            ExchangeRateError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for HttpExchangeRateProvider {
    async fn rate(&self, pair: &CurrencyPair) -> Result<f64, ExchangeRateError> {
        tracing::debug!(pair = %pair, "Fetching exchange rate");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query(pair))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(pair = %pair, status = status.as_u16(), "Exchange rate API returned an error");
            return Err(ExchangeRateError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let envelope: RatesEnvelope = serde_json::from_str(&body)
            .map_err(|e| ExchangeRateError::InvalidResponse(e.to_string()))?;

        let rate = envelope
            .into_rates()
            .rates
            .get(&pair.target)
            .copied()
            .ok_or_else(|| ExchangeRateError::UnknownCurrency(pair.target.clone()))?;

        if !rate.is_finite() || rate <= 0.0 {
            tracing::warn!(pair = %pair, rate, "Exchange rate API returned an unusable rate");
            return Err(ExchangeRateError::InvalidResponse(format!(
                "rate {} for {} is not positive",
                rate, pair
            )));
        }
        Ok(rate)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RatesEnvelope {
    Wrapped { response: RatesBody },
    Flat(RatesBody),
}

impl RatesEnvelope {
    fn into_rates(self) -> RatesBody {
        match self {
            RatesEnvelope::Wrapped { response } => response,
            RatesEnvelope::Flat(body) => body,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesBody {
    rates: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/latest", addr)
    }

    async fn wrapped_rates(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        if params.get("api_key").map(String::as_str) != Some("test-key") {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
        }
        let mut rates = serde_json::Map::new();
        if params.get("symbols").map(String::as_str) == Some("BRL") {
            rates.insert("BRL".to_string(), json!(4.2466225406));
        }
        (
            StatusCode::OK,
            Json(json!({
                "meta": { "code": 200, "disclaimer": "test" },
                "response": {
                    "rates": rates,
                    "base": params.get("base"),
                    "date": "2020-03-20"
                }
            })),
        )
    }

    fn provider(url: String) -> HttpExchangeRateProvider {
        HttpExchangeRateProvider::new(
            HttpExchangeRateConfig::new(url)
                .with_api_key("test-key")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn reads_rate_from_wrapped_response() {
        let url = serve(Router::new().route("/latest", get(wrapped_rates))).await;
        let rate = provider(url)
            .rate(&CurrencyPair::new("usd", "brl"))
            .await
            .unwrap();
        assert_eq!(rate, 4.2466225406);
    }

    #[tokio::test]
    async fn reads_rate_from_flat_response() {
        let url = serve(Router::new().route(
            "/latest",
            get(|| async { Json(json!({ "rates": { "BRL": 5.1 }, "base": "EUR", "date": "2020-03-20" })) }),
        ))
        .await;
        let provider = HttpExchangeRateProvider::new(HttpExchangeRateConfig::new(url)).unwrap();
        let rate = provider.rate(&CurrencyPair::new("EUR", "BRL")).await.unwrap();
        assert_eq!(rate, 5.1);
    }

    #[tokio::test]
    async fn missing_symbol_is_unknown_currency() {
        let url = serve(Router::new().route("/latest", get(wrapped_rates))).await;
        let err = provider(url)
            .rate(&CurrencyPair::new("USD", "ABCD"))
            .await
            .unwrap_err();
        assert_eq!(err, ExchangeRateError::UnknownCurrency("ABCD".to_string()));
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let url = serve(Router::new().route("/latest", get(wrapped_rates))).await;
        let provider = HttpExchangeRateProvider::new(HttpExchangeRateConfig::new(url)).unwrap();
        let err = provider.rate(&CurrencyPair::new("USD", "BRL")).await.unwrap_err();
        assert_eq!(err, ExchangeRateError::Upstream { status: 401 });
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let url = serve(Router::new().route("/latest", get(|| async { "not json" }))).await;
        let provider = HttpExchangeRateProvider::new(HttpExchangeRateConfig::new(url)).unwrap();
        let err = provider.rate(&CurrencyPair::new("USD", "BRL")).await.unwrap_err();
        assert!(matches!(err, ExchangeRateError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn non_positive_rate_is_invalid_response() {
        for rate in [0.0, -4.2] {
            let url = serve(Router::new().route(
                "/latest",
                get(move || async move { Json(json!({ "rates": { "BRL": rate } })) }),
            ))
            .await;
            let provider = HttpExchangeRateProvider::new(HttpExchangeRateConfig::new(url)).unwrap();
            let err = provider.rate(&CurrencyPair::new("USD", "BRL")).await.unwrap_err();
            assert!(matches!(err, ExchangeRateError::InvalidResponse(_)), "rate {}", rate);
        }
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let url = serve(Router::new().route(
            "/latest",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "rates": { "BRL": 5.0 } }))
            }),
        ))
        .await;
        let provider = HttpExchangeRateProvider::new(
            HttpExchangeRateConfig::new(url).with_timeout(Duration::from_millis(200)),
        )
        .unwrap();
        let err = provider.rate(&CurrencyPair::new("USD", "BRL")).await.unwrap_err();
        assert!(matches!(err, ExchangeRateError::Timeout { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider =
            HttpExchangeRateProvider::new(HttpExchangeRateConfig::new(format!("http://{}/latest", addr)))
                .unwrap();
        let err = provider.rate(&CurrencyPair::new("USD", "BRL")).await.unwrap_err();
        assert!(matches!(err, ExchangeRateError::Network(_)));
    }

    #[test]
    fn api_key_is_not_debug_printed() {
        let config = HttpExchangeRateConfig::new("https://rates.example.com").with_api_key("k-123");
        assert!(!format!("{:?}", config).contains("k-123"));
    }
}
