//! JSONL session transcript.
//!
//! Every [`ConversationEvent`] becomes one JSON object on its own line,
//! tagged with `type` and an RFC 3339 `timestamp`. The file is opened in
//! append mode so several runs can share one transcript.

use chrono::{SecondsFormat, Utc};
use ideaforge_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) `path` for appending, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> Value {
        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert(
            "timestamp".to_string(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let line = match serde_json::to_string(&Self::record(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to serialize conversation event: {}", e);
                return;
            }
        };
        let Ok(mut writer) = self.writer.lock() else {
            warn!("Conversation log writer is poisoned, dropping event");
            return;
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!(
                "Failed to write conversation log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
