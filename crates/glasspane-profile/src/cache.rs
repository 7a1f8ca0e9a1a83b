#![forbid(unsafe_code)]

//! Freshness-bounded single-slot cache.
//!
//! Hosts use one [`TtlCache`] per payload kind (profile, repository list) to
//! skip refetching while a previous response is still fresh. Time never
//! comes from an ambient clock: every operation takes the caller's `now`,
//! which keeps expiry deterministic under test.
//!
//! # Invariants
//!
//! 1. `get` never returns a value older than the TTL.
//! 2. Expired entries are evicted on access; there is no background sweeper.
//! 3. `put` replaces any previous entry and restarts its freshness window.

use std::time::{Duration, Instant};

/// Default freshness window, matching the profile view's refetch policy.
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

/// A single cached value stamped with its write time.
#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Option<(T, Instant)>,
}

impl<T> TtlCache<T> {
    /// Create an empty cache with the given freshness window.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Create an empty cache with [`DEFAULT_TTL`].
    #[must_use]
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Store a value, stamping it with `now`.
    pub fn put(&mut self, value: T, now: Instant) {
        self.entry = Some((value, now));
    }

    /// The cached value while fresh; expired entries are evicted.
    pub fn get(&mut self, now: Instant) -> Option<&T> {
        if let Some((_, stamped)) = &self.entry
            && now.duration_since(*stamped) > self.ttl
        {
            self.entry = None;
        }
        self.entry.as_ref().map(|(value, _)| value)
    }

    /// Drop any cached value.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Whether a fresh value is present, without evicting.
    #[must_use]
    pub fn is_fresh(&self, now: Instant) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|(_, stamped)| now.duration_since(*stamped) <= self.ttl)
    }

    /// Age of the cached value, fresh or not.
    #[must_use]
    pub fn age(&self, now: Instant) -> Option<Duration> {
        self.entry
            .as_ref()
            .map(|(_, stamped)| now.duration_since(*stamped))
    }
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}
