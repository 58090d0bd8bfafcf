//! JSONL file writer for analysis events.
//!
//! Each [`AnalysisEvent`] becomes one JSON object per line, tagged with its
//! `type` and an RFC 3339 `timestamp`. Existing files are appended to, so a
//! single log can span several runs.

use sentiment_application::{AnalysisEvent, AnalysisLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Analysis logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAnalysisLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnalysisLogger {
    /// Open (or create) the log file at `path`, creating parent directories.
    ///
    /// Returns `None` and emits a warning if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create analysis log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open analysis log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: AnalysisEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert(
            "type".to_string(),
            Value::String(event.kind.as_str().to_string()),
        );
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl AnalysisLogger for JsonlAnalysisLogger {
    fn log(&self, event: AnalysisEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAnalysisLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_application::AnalysisEventKind;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_tagged_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("analysis.jsonl");
        let logger = JsonlAnalysisLogger::new(&path).unwrap();

        logger.log(AnalysisEvent::new(
            AnalysisEventKind::VectorScored,
            serde_json::json!({"index": 0, "score": 0.5427}),
        ));
        logger.log(AnalysisEvent::new(
            AnalysisEventKind::VectorsCombined,
            serde_json::json!({"count": 2}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "vector_scored");
        assert_eq!(lines[0]["index"], 0);
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["type"], "vectors_combined");
        assert_eq!(lines[1]["count"], 2);
    }

    #[test]
    fn test_wraps_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.jsonl");
        let logger = JsonlAnalysisLogger::new(&path).unwrap();

        logger.log(AnalysisEvent::new(
            AnalysisEventKind::AnalysisComplete,
            serde_json::json!(1.5),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "analysis_complete");
        assert_eq!(lines[0]["data"], 1.5);
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.jsonl");

        for _ in 0..2 {
            let logger = JsonlAnalysisLogger::new(&path).unwrap();
            logger.log(AnalysisEvent::new(
                AnalysisEventKind::AnalysisComplete,
                serde_json::json!({}),
            ));
        }

        assert_eq!(read_lines(&path).len(), 2);
        assert_eq!(
            JsonlAnalysisLogger::new(&path).unwrap().path(),
            path.as_path()
        );
    }
}
