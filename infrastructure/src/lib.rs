//! Infrastructure layer for ideaforge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP generative backend, the response cache,
//! random sources, the JSONL transcript logger and configuration loading.

pub mod backend;
pub mod cache;
pub mod config;
pub mod logging;
pub mod random;

// Re-export commonly used types
pub use backend::{HttpBackend, HttpBackendConfig, RetryPolicy, RetryingBackend};
pub use cache::InMemoryResponseCache;
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use random::{SeededRandom, ThreadRandom};
