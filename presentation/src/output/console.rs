//! Console output formatter for session outcomes

use colored::Colorize;
use ideaforge_domain::{AgentCallResult, OutputFormat, Phase, PhaseRecord, SessionOutcome};

/// Formats session outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (or back to terminal detection)
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    pub fn render(outcome: &SessionOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Report => Self::format_report(outcome),
            OutputFormat::Full => Self::format_full(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// The final artifact, unchanged
    pub fn format_report(outcome: &SessionOutcome) -> String {
        let mut output = outcome.content.trim_end().to_string();
        output.push('\n');
        output
    }

    /// Per-phase breakdown followed by the final artifact
    pub fn format_full(outcome: &SessionOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Ideation Session"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Prompt:".cyan().bold(),
            outcome.prompt
        ));
        output.push_str(&format!(
            "{} {} calls, {} fallbacks, {:.1}s{}\n",
            "Summary:".cyan().bold(),
            outcome.total_calls(),
            outcome.fallback_count(),
            outcome.duration_ms as f64 / 1000.0,
            if outcome.early_exit {
                ", early exit after foundation"
            } else {
                ""
            }
        ));

        for record in &outcome.phases {
            output.push_str(&Self::phase_section(record));
        }

        output.push_str(&Self::section_header("Final Report"));
        output.push('\n');
        output.push_str(outcome.content.trim_end());
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &SessionOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn phase_section(record: &PhaseRecord) -> String {
        let phase = record.phase();
        let title = format!("Phase {}: {}", phase.number(), phase.display_name());
        let mut output = Self::section_header(&title);

        if record.is_skipped() {
            output.push_str(&format!("{}\n", "skipped (early exit)".dimmed()));
            return output;
        }
        output.push_str(&format!(
            "{}\n",
            format!(
                "{} results, {} fallbacks, {:.1}s",
                record.results().len(),
                record.fallback_count(),
                record.elapsed().as_secs_f64()
            )
            .dimmed()
        ));

        for result in record.results() {
            output.push_str(&Self::result_block(phase, result));
        }
        output
    }

    fn result_block(phase: Phase, result: &AgentCallResult) -> String {
        let model = if result.model_used.is_empty() {
            "-"
        } else {
            result.model_used.as_str()
        };
        let mut label = format!(
            "── {} · {} · {}ms{} ──",
            result.display_name(),
            model,
            result.duration_ms,
            if result.cached { " · cached" } else { "" }
        );
        if result.succeeded {
            label = label.yellow().bold().to_string();
        } else {
            label = format!("{} (fallback)", label).red().bold().to_string();
        }

        let mut block = format!("\n{}\n", label);
        if let Some(error) = &result.error {
            block.push_str(&format!("{} {}\n", "Error:".red(), error));
        }
        // the synthesis text is shown in full under "Final Report"
        if phase == Phase::Synthesis {
            block.push_str(&format!("{}\n", "(see final report)".dimmed()));
        } else {
            block.push_str(result.content.trim());
            block.push('\n');
        }
        block
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
