//! HTTP adapters - REST API implementations.
//!
//! - `salary` - Salary calculator endpoint and heartbeat
//! - `middleware` - Per-client rate limiting
//! - `router` - Full router with the tower-http layer stack

pub mod middleware;
pub mod router;
pub mod salary;

pub use middleware::{rate_limit_middleware, RateLimitState};
pub use router::{app_router, HttpSettings};
pub use salary::{salary_routes, SalaryAppState};
