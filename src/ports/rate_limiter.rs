//! Rate limiting port for protecting the API and the upstream rate provider.
//!
//! This port hands out one token bucket per client identity. Implementations
//! must be thread-safe: the registry is shared by every in-flight request.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::rate_limit::{ClientIdentity, TokenBucket};

/// Port for per-client admission control.
#[async_trait]
pub trait ClientRateLimiter: Send + Sync {
    /// Returns the bucket for `client`, creating it on first contact.
    ///
    /// Repeat calls for the same identity return the same bucket until the
    /// entry is evicted.
    async fn limiter_for(&self, client: &ClientIdentity) -> Arc<TokenBucket>;

    /// Number of clients currently tracked.
    async fn tracked_clients(&self) -> usize;

    /// Takes one token from the client's bucket.
    async fn check(&self, client: &ClientIdentity) -> bool {
        self.limiter_for(client).await.allow()
    }
}
