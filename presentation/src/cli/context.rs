//! Conversation context input (`--context <file.json>`)

use ideaforge_domain::ConversationTurn;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextFileError {
    #[error("Could not read context file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid context file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Parse a JSON array of `{role, content}` turns.
pub fn parse_context(json: &str) -> Result<Vec<ConversationTurn>, serde_json::Error> {
    let turns: Vec<ConversationTurn> = serde_json::from_str(json)?;
    Ok(turns
        .into_iter()
        .filter(|turn| !turn.content.trim().is_empty())
        .collect())
}

pub fn load_context(path: &Path) -> Result<Vec<ConversationTurn>, ContextFileError> {
    let display = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| ContextFileError::Io {
        path: display.clone(),
        source,
    })?;
    parse_context(&json).map_err(|source| ContextFileError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideaforge_domain::Role;

    #[test]
    fn test_parse_turns_in_order() {
        let turns = parse_context(
            r#"[
                {"role": "user", "content": "We run a bike-share."},
                {"role": "assistant", "content": "Noted."},
                {"role": "user", "content": "   "}
            ]"#,
        )
        .unwrap();

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1], ConversationTurn::assistant("Noted."));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(parse_context(r#"[{"role": "tool", "content": "x"}]"#).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_context(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
