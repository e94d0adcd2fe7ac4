//! In-memory response cache with TTL and a capacity bound.

use ideaforge_application::ports::response_cache::{CacheKey, CachedResponse, ResponseCache};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    response: CachedResponse,
    inserted_at: Instant,
}

/// Process-local cache shared by all sessions.
///
/// Expired entries are dropped lazily on lookup and during inserts. When
/// full, the oldest entry is evicted.
pub struct InMemoryResponseCache {
    entries: Mutex<HashMap<CacheKey, Entry>>,
    ttl: Duration,
    max_entries: usize,
}

impl InMemoryResponseCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_fresh(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.inserted_at) < self.ttl
    }
}

impl ResponseCache for InMemoryResponseCache {
    fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
        let mut entries = self.entries.lock().ok()?;
        let now = Instant::now();
        match entries.get(key) {
            Some(entry) if self.is_fresh(entry, now) => Some(entry.response.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: CacheKey, response: CachedResponse) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        let now = Instant::now();

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
            if entries.len() >= self.max_entries
                && let Some(oldest) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(k, _)| k.clone())
            {
                debug!(phase = oldest.phase.as_str(), "Evicting oldest cache entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            Entry {
                response,
                inserted_at: now,
            },
        );
    }
}
