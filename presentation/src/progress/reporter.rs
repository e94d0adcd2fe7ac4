//! Progress reporting for ideation sessions

use colored::Colorize;
use ideaforge_application::ports::progress::ProgressNotifier;
use ideaforge_domain::{AgentCallResult, Phase, PhaseRecord};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with indicatif bars on stderr
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Time-boxed phases have no known call count
    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos} calls {elapsed} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_title(phase: Phase) -> String {
        format!("Phase {}: {}", phase.number(), phase.display_name())
    }

    fn call_status(result: &AgentCallResult) -> String {
        let name = result.display_name();
        if result.succeeded {
            format!("{} {}", "v".green(), name)
        } else {
            format!("{} {} (fallback)", "x".red(), name)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: Phase, planned_calls: Option<usize>) {
        let pb = match planned_calls {
            Some(total) => {
                let pb = self.multi.add(ProgressBar::new(total as u64));
                pb.set_style(Self::bar_style());
                pb
            }
            None => {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(120));
                pb
            }
        };
        pb.set_prefix(Self::phase_title(phase));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_call_complete(&self, result: &AgentCallResult) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::call_status(result));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, record: &PhaseRecord) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            let summary = match record.fallback_count() {
                0 => "complete".green().to_string(),
                n => format!("complete, {} fallbacks", n).yellow().to_string(),
            };
            pb.finish_with_message(summary);
        }
    }

    fn on_early_exit(&self, elapsed: Duration) {
        let _ = self.multi.println(format!(
            "{} foundation took {:.0}s, skipping to synthesis",
            "!".yellow(),
            elapsed.as_secs_f64()
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: Phase, planned_calls: Option<usize>) {
        let title = ProgressReporter::phase_title(phase);
        match planned_calls {
            Some(n) => eprintln!("{} {} ({} calls)", "->".cyan(), title.bold(), n),
            None => eprintln!("{} {} (time-boxed)", "->".cyan(), title.bold()),
        }
    }

    fn on_call_complete(&self, result: &AgentCallResult) {
        eprintln!("  {}", ProgressReporter::call_status(result));
    }

    fn on_phase_complete(&self, _record: &PhaseRecord) {
        eprintln!();
    }

    fn on_early_exit(&self, elapsed: Duration) {
        eprintln!(
            "{} foundation took {:.0}s, skipping to synthesis",
            "!".yellow(),
            elapsed.as_secs_f64()
        );
    }
}
