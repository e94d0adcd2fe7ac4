//! Response cache port
//!
//! Best-effort memoization of backend output keyed by
//! `(prompt, persona, phase)`. A miss, an eviction or a stale entry never
//! blocks orchestration; lifecycle (TTL, capacity) belongs to the adapter.

use ideaforge_domain::{Phase, PersonaId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub prompt: String,
    pub persona: PersonaId,
    pub phase: Phase,
}

impl CacheKey {
    pub fn new(prompt: impl Into<String>, persona: PersonaId, phase: Phase) -> Self {
        Self {
            prompt: prompt.into(),
            persona,
            phase,
        }
    }
}

/// A cached backend answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub content: String,
    pub model: String,
}

pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<CachedResponse>;

    fn put(&self, key: CacheKey, response: CachedResponse);
}

/// Cache that never stores anything
pub struct NoCache;

impl ResponseCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<CachedResponse> {
        None
    }

    fn put(&self, _key: CacheKey, _response: CachedResponse) {}
}
