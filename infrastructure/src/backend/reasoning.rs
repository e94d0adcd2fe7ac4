//! Reasoning-trace removal.
//!
//! Reasoning models wrap their scratchpad in `<think>…</think>`. Only the
//! text after the trace is a contribution.

use regex::Regex;
use std::sync::LazyLock;

static THINK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<think>.*?</think>").expect("THINK_BLOCK is a compile-time constant")
});

/// Remove every `<think>` block and trim the result.
///
/// An opening tag that is never closed means the model ran out of tokens
/// mid-trace; everything from that tag on is dropped.
pub fn strip_reasoning_trace(text: &str) -> String {
    let stripped = THINK_BLOCK.replace_all(text, "");
    let visible = match find_ignore_case(&stripped, "<think>") {
        Some(idx) => &stripped[..idx],
        None => &stripped[..],
    };
    visible.trim().to_string()
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}
