//! Phase scheduling configuration from TOML (`[phases]` section)

use ideaforge_application::{OrchestrationConfig, PhaseBudgets};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw phase budgets. A budget of `0` lets the phase start no calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePhasesConfig {
    pub foundation_budget_secs: u64,
    pub expansion_budget_secs: u64,
    pub expansion_max_iterations: usize,
    pub refinement_budget_secs: u64,
    pub synthesis_budget_secs: u64,
    /// `0` disables the early exit
    pub session_budget_secs: u64,
    pub early_exit_fraction: f64,
}

impl Default for FilePhasesConfig {
    fn default() -> Self {
        Self {
            foundation_budget_secs: 180,
            expansion_budget_secs: 120,
            expansion_max_iterations: 12,
            refinement_budget_secs: 180,
            synthesis_budget_secs: 120,
            session_budget_secs: 900,
            early_exit_fraction: 0.6,
        }
    }
}

impl FilePhasesConfig {
    pub fn budgets(&self) -> PhaseBudgets {
        PhaseBudgets {
            foundation: Duration::from_secs(self.foundation_budget_secs),
            expansion: Duration::from_secs(self.expansion_budget_secs),
            refinement: Duration::from_secs(self.refinement_budget_secs),
            synthesis: Duration::from_secs(self.synthesis_budget_secs),
        }
    }

    pub fn apply(&self, config: OrchestrationConfig) -> OrchestrationConfig {
        let session_budget =
            (self.session_budget_secs > 0).then(|| Duration::from_secs(self.session_budget_secs));
        config
            .with_budgets(self.budgets())
            .with_expansion_max_iterations(self.expansion_max_iterations)
            .with_session_budget(session_budget)
            .with_early_exit_fraction(self.early_exit_fraction)
    }
}
