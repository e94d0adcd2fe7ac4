//! Final artifact composition
//!
//! The session's output is one markdown document with a title and a
//! section per phase. Every phase gets its header even when it was
//! skipped or produced nothing, so downstream parsers can rely on the
//! structure.

use super::entities::Phase;
use super::session::SessionState;

pub struct ReportComposer;

impl ReportComposer {
    pub fn compose(state: &SessionState) -> String {
        let mut out = format!("# Ideation Report: {}\n", state.original_prompt().trim());

        for phase in Phase::ALL {
            out.push('\n');
            out.push_str(&phase.section_header());
            out.push_str("\n\n");

            let Some(record) = state.record(phase) else {
                out.push_str("_Phase did not run._\n");
                continue;
            };
            if record.is_skipped() {
                out.push_str(
                    "_Skipped: the session budget was largely consumed by earlier phases._\n",
                );
                continue;
            }
            if record.results().is_empty() {
                out.push_str("_No contributions were produced within the phase budget._\n");
                continue;
            }

            if phase == Phase::Synthesis {
                for result in record.results() {
                    out.push_str(result.content.trim());
                    out.push('\n');
                }
                continue;
            }

            for (i, result) in record.results().iter().enumerate() {
                let marker = if result.succeeded { "" } else { " (fallback)" };
                out.push_str(&format!(
                    "### {}. {}{}\n\n{}\n\n",
                    i + 1,
                    result.persona.default_display_name(),
                    marker,
                    result.content.trim()
                ));
            }
        }
        out
    }
}
