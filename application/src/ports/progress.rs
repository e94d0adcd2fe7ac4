//! Progress notification port
//!
//! Defines the interface for reporting progress during a session.

use ideaforge_domain::{AgentCallResult, Phase, PhaseRecord};
use std::time::Duration;

/// Callback for progress updates during a session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts. `planned_calls` is `None` for
    /// time-boxed phases whose call count is not known up front.
    fn on_phase_start(&self, phase: Phase, planned_calls: Option<usize>);

    /// Called after each persona call (or its fallback) completes
    fn on_call_complete(&self, result: &AgentCallResult);

    /// Called when a phase is sealed
    fn on_phase_complete(&self, record: &PhaseRecord);

    /// Called when phases 2 and 3 are skipped after a slow foundation
    fn on_early_exit(&self, _elapsed: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: Phase, _planned_calls: Option<usize>) {}
    fn on_call_complete(&self, _result: &AgentCallResult) {}
    fn on_phase_complete(&self, _record: &PhaseRecord) {}
}
