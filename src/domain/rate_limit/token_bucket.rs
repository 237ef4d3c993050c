//! Token bucket admission policy.
//!
//! A bucket holds up to `burst` tokens and refills continuously at
//! `refill_per_second`. Each admitted unit of work consumes one token, so a
//! client may burst up to `burst` requests while its long-run average is
//! bounded by the refill rate.
//!
//! The bucket stores the instant at which it will be full again rather than
//! a running token count. Accrual is therefore derived from whole-nanosecond
//! durations and never accumulates rounding error across calls.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Refill rate and capacity shared by every bucket a registry creates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketSettings {
    /// Tokens added per second.
    pub refill_per_second: f64,
    /// Maximum stored tokens.
    pub burst: u32,
}

impl BucketSettings {
    pub fn new(refill_per_second: f64, burst: u32) -> Self {
        Self {
            refill_per_second,
            burst,
        }
    }

    /// Time needed to accrue a single token, rounded up to the next
    /// nanosecond.
    pub fn token_interval(&self) -> Duration {
        let nanos = (NANOS_PER_SECOND / self.refill_per_second).ceil();
        if nanos.is_nan() || nanos >= u64::MAX as f64 {
            Duration::MAX
        } else {
            Duration::from_nanos(nanos.max(1.0) as u64)
        }
    }
}

/// A single client's token bucket.
///
/// The refill-and-consume step runs under an internal mutex, so one bucket
/// can be shared by several in-flight requests of the same client.
#[derive(Debug)]
pub struct TokenBucket {
    settings: BucketSettings,
    interval: Duration,
    /// Instant from which the bucket holds `burst` tokens again.
    full_at: Mutex<Instant>,
}

impl TokenBucket {
    /// Creates a full bucket.
    pub fn new(settings: BucketSettings) -> Self {
        Self::new_at(settings, Instant::now())
    }

    /// Creates a full bucket whose refill clock starts at `now`.
    pub fn new_at(settings: BucketSettings, now: Instant) -> Self {
        Self {
            settings,
            interval: settings.token_interval(),
            full_at: Mutex::new(now),
        }
    }

    pub fn settings(&self) -> BucketSettings {
        self.settings
    }

    /// Takes one token if available.
    pub fn allow(&self) -> bool {
        self.allow_at(Instant::now())
    }

    /// Takes one token if available at `now`.
    ///
    /// An instant earlier than a previous call sees no extra accrual.
    pub fn allow_at(&self, now: Instant) -> bool {
        let mut full_at = self.lock_state();
        let debt = full_at.saturating_duration_since(now);

        // A token is available while the outstanding debt leaves room for one.
        let room = self.interval.checked_mul(self.settings.burst.saturating_sub(1));
        if matches!(room, Some(room) if debt > room) {
            return false;
        }

        let base = (*full_at).max(now);
        match base.checked_add(self.interval) {
            Some(next) => {
                *full_at = next;
                true
            }
            None => false,
        }
    }

    /// Tokens available at `now`, without consuming any.
    pub fn available_at(&self, now: Instant) -> f64 {
        let full_at = self.lock_state();
        let burst = f64::from(self.settings.burst);
        let debt = full_at.saturating_duration_since(now);
        if debt.is_zero() {
            return burst;
        }
        let owed = debt.as_nanos() as f64 / self.interval.as_nanos() as f64;
        (burst - owed).max(0.0)
    }

    // The critical section never panics, but a poisoned lock still holds a
    // valid instant.
    fn lock_state(&self) -> MutexGuard<'_, Instant> {
        self.full_at.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
