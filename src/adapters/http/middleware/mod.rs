//! HTTP middleware for axum.
//!
//! - `rate_limit` - Per-client token bucket admission

pub mod rate_limit;

pub use rate_limit::{rate_limit_middleware, RateLimitState};
