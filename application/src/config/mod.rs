//! Application-level configuration.
//!
//! - [`OrchestrationConfig`]: phase budgets and call limits
//! - [`PhaseBudgets`]: per-phase wall-clock allowances

pub mod orchestration_config;

pub use orchestration_config::{OrchestrationConfig, PhaseBudgets};
