//! JSONL transcript of quiz sessions.
//!
//! Every line carries the event `type`, a `timestamp`, the `session` it
//! belongs to and its `seq` within that session. A session starts at each
//! `quiz_started` event; its id is the start timestamp, so transcripts of
//! several runs can share one file.

use quiz_application::{QuizEvent, QuizEventLogger};
use serde_json::{Map, Value};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

const SESSION_START: &str = "quiz_started";

/// Mutable transcript state behind the logger's lock
struct Transcript {
    writer: Box<dyn Write + Send>,
    session: Option<String>,
    seq: u64,
    dropped: usize,
}

impl Transcript {
    fn record(&mut self, event: QuizEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        if event.event_type == SESSION_START {
            self.session = Some(timestamp.clone());
            self.seq = 0;
        }
        self.seq += 1;

        let mut record = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => Map::from_iter([("data".to_string(), other)]),
        };
        record.insert("type".to_string(), Value::from(event.event_type));
        record.insert("timestamp".to_string(), Value::from(timestamp));
        record.insert(
            "session".to_string(),
            self.session.clone().map_or(Value::Null, Value::from),
        );
        record.insert("seq".to_string(), Value::from(self.seq));
        Value::Object(record)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// JSONL event logger that writes one JSON object per line.
///
/// Appends to an existing file so consecutive runs share one transcript.
/// A failed write is counted and reported once at `warn` level; the quiz
/// keeps running.
pub struct JsonlQuizEventLogger {
    transcript: Mutex<Transcript>,
    path: PathBuf,
}

impl JsonlQuizEventLogger {
    /// Create a logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self::with_writer(BufWriter::new(file), path))
    }

    fn with_writer(writer: impl Write + Send + 'static, path: &Path) -> Self {
        Self {
            transcript: Mutex::new(Transcript {
                writer: Box::new(writer),
                session: None,
                seq: 0,
                dropped: 0,
            }),
            path: path.to_path_buf(),
        }
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Events that could not be written
    pub fn dropped_events(&self) -> usize {
        self.transcript.lock().map_or(0, |t| t.dropped)
    }
}

impl QuizEventLogger for JsonlQuizEventLogger {
    fn log(&self, event: QuizEvent) {
        let Ok(mut transcript) = self.transcript.lock() else {
            return;
        };

        let record = transcript.record(event);
        let result = serde_json::to_string(&record)
            .map_err(io::Error::from)
            .and_then(|line| transcript.write_line(&line));

        if let Err(e) = result {
            if transcript.dropped == 0 {
                warn!(
                    "Writing to event log {} failed, further events are dropped silently: {}",
                    self.path.display(),
                    e
                );
            }
            transcript.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("quiz.events.jsonl");
        let logger = JsonlQuizEventLogger::new(&path).unwrap();

        logger.log(QuizEvent::new("quiz_started", json!({"question_count": 25})));
        logger.log(QuizEvent::new(
            "answer_submitted",
            json!({"question_id": "q3", "answer_index": 1}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["type"], "quiz_started");
        assert_eq!(lines[0]["question_count"], 25);
        assert_eq!(lines[1]["question_id"], "q3");
    }

    #[test]
    fn test_lines_are_grouped_by_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.jsonl");
        let logger = JsonlQuizEventLogger::new(&path).unwrap();

        logger.log(QuizEvent::new("quiz_started", json!({})));
        logger.log(QuizEvent::new("answer_submitted", json!({})));
        logger.log(QuizEvent::new("quiz_reset", json!({})));
        std::thread::sleep(std::time::Duration::from_millis(5));
        logger.log(QuizEvent::new("quiz_started", json!({})));
        drop(logger);

        let lines = read_lines(&path);
        let seqs: Vec<u64> = lines.iter().map(|l| l["seq"].as_u64().unwrap()).collect();
        assert_eq!(seqs, vec![1, 2, 3, 1]);

        assert_eq!(lines[0]["session"], lines[0]["timestamp"]);
        assert_eq!(lines[1]["session"], lines[0]["session"]);
        assert_eq!(lines[2]["session"], lines[0]["session"]);
        assert_ne!(lines[3]["session"], lines[0]["session"]);
    }

    #[test]
    fn test_event_before_any_session_has_null_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.jsonl");
        let logger = JsonlQuizEventLogger::new(&path).unwrap();

        logger.log(QuizEvent::new("answer_ignored", json!("no session")));
        drop(logger);

        let lines = read_lines(&path);
        assert!(lines[0]["session"].is_null());
        assert_eq!(lines[0]["data"], "no session");
        assert_eq!(lines[0]["seq"], 1);
    }

    #[test]
    fn test_appends_across_loggers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.jsonl");

        for _ in 0..2 {
            let logger = JsonlQuizEventLogger::new(&path).unwrap();
            logger.log(QuizEvent::new("quiz_reset", json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_failed_writes_are_counted() {
        let logger = JsonlQuizEventLogger::with_writer(BrokenPipe, Path::new("broken.jsonl"));

        logger.log(QuizEvent::new("quiz_started", json!({})));
        logger.log(QuizEvent::new("answer_submitted", json!({})));

        assert_eq!(logger.dropped_events(), 2);
    }
}
