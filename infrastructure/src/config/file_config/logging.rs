//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Mirror diagnostic logs to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Append a JSONL transcript of every call to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<PathBuf>,
}
