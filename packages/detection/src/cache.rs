//! Bounded, time-expiring memoization of detection results.
//!
//! Keys are normalized URLs. Entries expire after a fixed TTL and the
//! table enforces a maximum size with strict insertion-order FIFO
//! eviction — oldest-inserted first, not least-recently-used.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::trace;

use crate::types::result::DetectionResult;

/// Production time-to-live: five minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Production entry bound.
const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: DetectionResult,
    stored_at: Instant,
}

/// Insertion-ordered result cache with eager TTL eviction.
///
/// All operations take `&self`; the map sits behind a mutex so the
/// read-then-evict sequence in [`get`](Self::get) is a single critical
/// section even across threads.
#[derive(Debug)]
pub struct ResultCache {
    entries: Mutex<IndexMap<String, CacheEntry>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    /// Create a cache with the production TTL and bound.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    /// Create a cache with explicit limits.
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            ttl,
            capacity,
        }
    }

    /// Look up a result; an entry past its TTL is evicted and misses.
    pub fn get(&self, key: &str) -> Option<DetectionResult> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() > self.ttl => {
                trace!(%key, "cache entry expired");
                // shift_remove keeps the remaining insertion order exact.
                entries.shift_remove(key);
                None
            }
            Some(entry) => Some(entry.result.clone()),
            None => None,
        }
    }

    /// Store a result, evicting the oldest-inserted entry at capacity.
    ///
    /// Eviction runs before the insert even when the key already exists,
    /// mirroring the bound check's position in the write path.
    pub fn put(&self, key: impl Into<String>, result: DetectionResult) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= self.capacity {
            entries.shift_remove_index(0);
        }
        entries.insert(
            key.into(),
            CacheEntry {
                result,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of live entries (expired entries count until observed).
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
