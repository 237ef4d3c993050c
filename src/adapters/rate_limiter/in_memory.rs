//! In-memory client limiter registry.
//!
//! Maps each client identity to its own token bucket. Entries are created on
//! first contact and evicted by a background sweep once idle. State is
//! process-local and lost on restart.
//!
//! ## Eviction bound
//!
//! An entry is removed by the first sweep that finds it idle for longer than
//! `idle_timeout`. With the defaults (30s idle, 60s sweep) a client can stay
//! tracked up to ~90s after its last request.
//!
//! ## Graceful Shutdown
//!
//! [`ClientLimiterRegistry::run_sweeper`] listens on a watch channel and
//! returns as soon as `true` is sent or the sender is dropped.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{watch, RwLock};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::domain::rate_limit::{ClientIdentity, TokenBucket};
use crate::ports::ClientRateLimiter;

use super::config::RegistryConfig;

/// A tracked client.
#[derive(Debug)]
struct ClientEntry {
    limiter: Arc<TokenBucket>,
    last_seen: Instant,
}

/// Registry of per-client token buckets.
///
/// Every access to the map (lookup with refresh, insert, sweep) takes the
/// write lock, so concurrent first contacts from one client always resolve
/// to a single bucket.
#[derive(Debug)]
pub struct ClientLimiterRegistry {
    config: RegistryConfig,
    clients: RwLock<HashMap<ClientIdentity, ClientEntry>>,
}

impl ClientLimiterRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            clients: RwLock::new(HashMap::new()),
        }
    }

    async fn limiter_at(&self, client: &ClientIdentity, now: Instant) -> Arc<TokenBucket> {
        let mut clients = self.clients.write().await;

        if let Some(entry) = clients.get_mut(client) {
            entry.last_seen = entry.last_seen.max(now);
            return Arc::clone(&entry.limiter);
        }

        tracing::debug!(client = %client, "Tracking new client");
        let limiter = Arc::new(TokenBucket::new_at(self.config.bucket, now));
        clients.insert(
            client.clone(),
            ClientEntry {
                limiter: Arc::clone(&limiter),
                last_seen: now,
            },
        );
        limiter
    }

    /// Runs one eviction pass now.
    pub async fn sweep_once(&self) -> usize {
        self.sweep_at(Instant::now()).await
    }

    /// Removes every client idle for longer than `idle_timeout` at `now`.
    ///
    /// Returns the number of evicted clients.
    pub async fn sweep_at(&self, now: Instant) -> usize {
        let idle_timeout = self.config.idle_timeout;
        let mut clients = self.clients.write().await;
        let before = clients.len();

        clients.retain(|client, entry| {
            let idle = now.saturating_duration_since(entry.last_seen);
            if idle > idle_timeout {
                tracing::info!(client = %client, idle_secs = idle.as_secs(), "Evicting idle client");
                false
            } else {
                true
            }
        });

        let evicted = before - clients.len();
        tracing::debug!(evicted, remaining = clients.len(), "Client sweep complete");
        evicted
    }

    /// Run the eviction loop until a shutdown signal is received.
    ///
    /// The first pass happens one `sweep_interval` after the call.
    pub async fn run_sweeper(&self, mut shutdown: watch::Receiver<bool>) {
        if *shutdown.borrow_and_update() {
            tracing::debug!("Client sweeper stopped before start");
            return;
        }

        let period = self.config.sweep_interval;
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Client sweeper stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }
}

#[async_trait]
impl ClientRateLimiter for ClientLimiterRegistry {
    async fn limiter_for(&self, client: &ClientIdentity) -> Arc<TokenBucket> {
        self.limiter_at(client, Instant::now()).await
    }

    async fn tracked_clients(&self) -> usize {
        self.clients.read().await.len()
    }
}
