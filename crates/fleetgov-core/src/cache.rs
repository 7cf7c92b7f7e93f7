//! Snapshot cache: memoizes telemetry builds under a TTL.

use crate::error::{Result, TelemetryError};
use crate::model::Batch;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Cache key for one telemetry request shape.
///
/// Toggling the stress flag is itself a different key, so switching
/// modes always forces a fresh build on first use of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TelemetryKey {
    /// Whether stress-mode bounds were requested.
    pub stressed: bool,
    /// Requested batch size.
    pub n_agents: usize,
}

/// One stored snapshot with its creation time.
#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: Batch,
    created_at: Instant,
}

/// Thread-safe snapshot cache keyed by request parameters.
///
/// The entry map lives behind a single `Mutex` that is held across the
/// builder call, so concurrent callers are serialized and converge on
/// one snapshot per TTL window instead of observing different random
/// batches for what should be the same snapshot. `invalidate_all` is
/// safe at any time; a build racing a refresh simply repopulates with a
/// fresh creation time.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    entries: Arc<Mutex<HashMap<TelemetryKey, CacheEntry>>>,
}

impl SnapshotCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// Return the stored snapshot for `key` if it is younger than `ttl`,
    /// otherwise build, store, and return a fresh one.
    ///
    /// A builder error propagates unmemoized: nothing is stored and any
    /// prior entry for `key` is left untouched, so the next call is free
    /// to retry.
    ///
    /// # Errors
    /// Returns `CachePoisoned` if the lock is poisoned, or whatever the
    /// builder fails with.
    pub fn get_or_build<F>(&self, key: TelemetryKey, ttl: Duration, build: F) -> Result<Batch>
    where
        F: FnOnce() -> Result<Batch>,
    {
        let mut entries = self.entries.lock().map_err(|_| TelemetryError::CachePoisoned)?;

        if let Some(entry) = entries.get(&key) {
            if entry.created_at.elapsed() < ttl {
                tracing::debug!(
                    stressed = key.stressed,
                    n_agents = key.n_agents,
                    "snapshot cache hit"
                );
                return Ok(entry.snapshot.clone());
            }
        }

        tracing::debug!(stressed = key.stressed, n_agents = key.n_agents, "snapshot cache miss");
        let snapshot = build()?;
        entries.insert(key, CacheEntry { snapshot: snapshot.clone(), created_at: Instant::now() });
        Ok(snapshot)
    }

    /// Remove every stored entry regardless of age.
    ///
    /// The next `get_or_build` for any key is guaranteed a fresh build.
    /// Returns the number of entries removed.
    ///
    /// # Errors
    /// Returns `CachePoisoned` if the lock is poisoned.
    pub fn invalidate_all(&self) -> Result<usize> {
        let mut entries = self.entries.lock().map_err(|_| TelemetryError::CachePoisoned)?;
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }

    /// Get the current number of stored snapshots.
    ///
    /// # Errors
    /// Returns `CachePoisoned` if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        let entries = self.entries.lock().map_err(|_| TelemetryError::CachePoisoned)?;
        Ok(entries.len())
    }

    /// Check if the cache is empty.
    ///
    /// # Errors
    /// Returns `CachePoisoned` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        let entries = self.entries.lock().map_err(|_| TelemetryError::CachePoisoned)?;
        Ok(entries.is_empty())
    }
}
