//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// First line of `text` that carries content once markdown decoration
/// (headers, list bullets, numbering, bold markers) is stripped.
pub fn first_meaningful_line(text: &str) -> Option<String> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches('#')
                .trim_start_matches(['-', '*', '>'])
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .trim_start_matches(['.', ')', ':'])
                .replace("**", "")
                .trim()
                .to_string()
        })
        .find(|line| line.chars().any(char::is_alphanumeric))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; cutting inside it must back up
        assert_eq!(truncate("ééééé", 6), "é...");
        assert_eq!(truncate("ééééé", 10), "ééééé");
    }

    #[test]
    fn test_first_meaningful_line_skips_decoration() {
        let text = "\n## \n1. **Bike-share corridors** along transit lines\n- second";
        assert_eq!(
            first_meaningful_line(text),
            Some("Bike-share corridors along transit lines".to_string())
        );
    }

    #[test]
    fn test_first_meaningful_line_plain() {
        assert_eq!(
            first_meaningful_line("Solar buses\nmore").as_deref(),
            Some("Solar buses")
        );
        assert_eq!(first_meaningful_line("  \n---\n"), None);
    }
}
