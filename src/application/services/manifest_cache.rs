//! Single-slot manifest cache with an explicit expiry.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::entities::Manifest;
use crate::domain::ports::Clock;

/// The manifest held by the cache together with its lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    manifest: Arc<Manifest>,
    fetched_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(manifest: Arc<Manifest>, fetched_at: DateTime<Utc>, ttl: TimeDelta) -> Self {
        let expires_at = fetched_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            manifest,
            fetched_at,
            expires_at,
        }
    }

    /// Cached manifest.
    #[must_use]
    pub fn manifest(&self) -> &Arc<Manifest> {
        &self.manifest
    }

    /// When the manifest was stored.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// When the manifest stops being served.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true while `now` is before the expiry.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Holds at most one manifest.
///
/// Concurrent misses may each fetch; the last write wins. The lock is never
/// held while fetching. A fetch that overlaps an [`invalidate`](Self::invalidate)
/// is returned to its caller but not stored.
pub struct ManifestCache {
    slot: RwLock<Option<CacheEntry>>,
    generation: AtomicU64,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ManifestCache {
    /// Creates an empty cache reading time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            generation: AtomicU64::new(0),
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached manifest if it has not expired.
    pub async fn get(&self) -> Option<Arc<Manifest>> {
        let now = self.clock.now();
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|entry| entry.is_valid_at(now))
            .map(|entry| Arc::clone(&entry.manifest))
    }

    /// Returns the cached manifest, or runs `fetch` and caches its result
    /// for `ttl`.
    ///
    /// Whatever `fetch` returns is cached, including an empty manifest
    /// produced by a failed request. An expired entry is never served.
    pub async fn get_or_fetch<F, Fut>(&self, ttl: TimeDelta, fetch: F) -> Arc<Manifest>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Manifest>,
    {
        if let Some(manifest) = self.get().await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("Manifest cache hit");
            return manifest;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!("Manifest cache miss");

        let generation = self.generation.load(Ordering::Acquire);
        let manifest = Arc::new(fetch().await);

        let mut slot = self.slot.write().await;
        if self.generation.load(Ordering::Acquire) != generation {
            debug!("Cache invalidated during fetch, result not stored");
            return manifest;
        }

        let entry = CacheEntry::new(Arc::clone(&manifest), self.clock.now(), ttl);
        debug!(
            entries = manifest.entry_count(),
            expires_at = %entry.expires_at,
            "Storing manifest in cache"
        );
        *slot = Some(entry);

        manifest
    }

    /// Drops the cached manifest.
    ///
    /// Fetches already in flight will not store their result.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        if slot.take().is_some() {
            debug!("Invalidated manifest cache");
        }
    }

    /// Returns a snapshot of the current entry, expired or not.
    pub async fn entry(&self) -> Option<CacheEntry> {
        self.slot.read().await.clone()
    }

    /// Returns cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        // Best effort: a writer holding the lock reads as "no entry".
        let has_entry = self.slot.try_read().is_ok_and(|slot| slot.is_some());
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            has_entry,
        }
    }
}

/// Statistics about cache use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests served from the cache.
    pub hits: u64,
    /// Requests that triggered a fetch.
    pub misses: u64,
    /// Whether a manifest is stored, expired or not.
    pub has_entry: bool,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Manifest cache: {} hits, {} misses, entry {}",
            self.hits,
            self.misses,
            if self.has_entry { "present" } else { "absent" }
        )
    }
}
