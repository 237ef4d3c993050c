//! Rate limiting middleware for axum.
//!
//! Every request is mapped to a client identity, the client's token bucket is
//! fetched from the registry, and the request is rejected with
//! `429 Too Many Requests` (empty body) when the bucket is empty. Rejected
//! requests never reach the salary handler or the exchange rate API.
//!
//! # Client identity
//!
//! The identity comes from the peer address according to the configured
//! [`IdentityPolicy`]. When `trust_forwarded_headers` is set, the first
//! address of `X-Forwarded-For` (else `X-Real-IP`) wins over the peer. Header
//! values that are not IP addresses are ignored. Requests without any usable
//! address share the `unknown` bucket.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//!
//! let state = RateLimitState::new(registry).with_identity(IdentityPolicy::PeerIp);
//!
//! let app = Router::new()
//!     .route("/salary/calculator", get(handler))
//!     .layer(middleware::from_fn_with_state(state, rate_limit_middleware));
//! ```

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::rate_limit::{ClientIdentity, IdentityPolicy};
use crate::ports::ClientRateLimiter;

/// Rate limiter middleware state.
#[derive(Clone)]
pub struct RateLimitState {
    limiter: Arc<dyn ClientRateLimiter>,
    identity: IdentityPolicy,
    trust_forwarded_headers: bool,
}

impl RateLimitState {
    pub fn new(limiter: Arc<dyn ClientRateLimiter>) -> Self {
        Self {
            limiter,
            identity: IdentityPolicy::default(),
            trust_forwarded_headers: false,
        }
    }

    pub fn with_identity(mut self, identity: IdentityPolicy) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }

    /// Resolves the client identity of a request.
    pub fn resolve_client(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> ClientIdentity {
        if self.trust_forwarded_headers {
            if let Some(ip) = forwarded_ip(headers) {
                return ClientIdentity::new(ip.to_string());
            }
        }

        match peer {
            Some(addr) => ClientIdentity::from_peer(addr, self.identity),
            None => ClientIdentity::unknown(),
        }
    }
}

/// Rejects requests from clients whose token bucket is empty.
pub async fn rate_limit_middleware(
    State(state): State<RateLimitState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client = state.resolve_client(request.headers(), connect_info.map(|ConnectInfo(addr)| addr));

    if !state.limiter.check(&client).await {
        tracing::debug!(client = %client, "Rate limit exceeded");
        return StatusCode::TOO_MANY_REQUESTS.into_response();
    }

    next.run(request).await
}

/// First address of X-Forwarded-For, else X-Real-IP.
fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let from_header = |name: &str| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok())
    };

    from_header("x-forwarded-for").or_else(|| from_header("x-real-ip"))
}
