//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording session events
//! (persona calls, sealed phases, the final artifact) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! session transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// Event type identifiers emitted by the orchestrator.
pub mod events {
    pub const AGENT_CALL: &str = "agent_call";
    pub const PHASE_SEALED: &str = "phase_sealed";
    pub const SESSION_EARLY_EXIT: &str = "session_early_exit";
    pub const SESSION_COMPLETE: &str = "session_complete";
}

/// A structured conversation event for logging.
///
/// The logger adds the timestamp when the event is written.
pub struct ConversationEvent {
    /// Event type identifier, one of [`events`].
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; failures to write are swallowed so
/// they can never disturb a session.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
