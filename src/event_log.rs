//! Append-only JSON-lines event log.
//!
//! The game loop hands records to an unbounded channel; a writer task owns
//! the file and serializes each record onto its own line. Logging never
//! blocks a frame, and a write failure only stops the log.

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::LockEvent;
use crate::types::PieceId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    Start {
        seed: u32,
        rows: usize,
        columns: usize,
        start_level: u32,
    },
    Lock {
        piece_id: PieceId,
        kind: &'static str,
        lines_cleared: u32,
        points: u32,
        tetris: bool,
        level_up: bool,
        score: u32,
        lines: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
        level: u32,
        pieces: u32,
    },
}

impl From<&LockEvent> for EventRecord {
    fn from(event: &LockEvent) -> Self {
        EventRecord::Lock {
            piece_id: event.piece_id,
            kind: event.kind.as_str(),
            lines_cleared: event.lines_cleared,
            points: event.points,
            tetris: event.tetris,
            level_up: event.level_up,
            score: event.score,
            lines: event.lines,
            level: event.level,
        }
    }
}

/// Serialize `record` as one newline-terminated JSON line into `buf`
pub fn encode_record(record: &EventRecord, buf: &mut Vec<u8>) -> serde_json::Result<()> {
    buf.clear();
    serde_json::to_writer(&mut *buf, record)?;
    buf.push(b'\n');
    Ok(())
}

/// Handle to the writer task; a disabled log drops every record.
#[derive(Debug, Default)]
pub struct EventLog {
    tx: Option<mpsc::UnboundedSender<EventRecord>>,
    writer: Option<JoinHandle<()>>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Spawn a writer appending to `path`. Must be called inside a runtime.
    pub fn open(path: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<EventRecord>();
        let writer = tokio::spawn(async move {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("[Game] Event log {} unavailable: {}", path, e);
                    return;
                }
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(record) = rx.recv().await {
                if encode_record(&record, &mut buf).is_err() {
                    continue;
                }
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }

            let _ = file.flush().await;
        });

        Self {
            tx: Some(tx),
            writer: Some(writer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, record: EventRecord) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(record);
        }
    }

    /// Close the channel and wait for pending records to be written
    pub async fn close(mut self) {
        self.tx = None;
        if let Some(writer) = self.writer.take() {
            let _ = writer.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_lock_record_shape() {
        let event = LockEvent {
            piece_id: 9,
            kind: PieceKind::I,
            lines_cleared: 4,
            points: 1200,
            tetris: true,
            level_up: false,
            score: 1200,
            lines: 4,
            level: 0,
            game_over: false,
        };
        let mut buf = Vec::new();
        encode_record(&EventRecord::from(&event), &mut buf).unwrap();

        assert_eq!(buf.last(), Some(&b'\n'));
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["type"], "lock");
        assert_eq!(value["kind"], "I");
        assert_eq!(value["points"], 1200);
        assert_eq!(value["tetris"], true);
    }

    #[test]
    fn test_game_over_tag() {
        let mut buf = Vec::new();
        encode_record(
            &EventRecord::GameOver {
                score: 40,
                lines: 1,
                level: 0,
                pieces: 30,
            },
            &mut buf,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["type"], "game_over");
        assert_eq!(value["pieces"], 30);
    }

    #[test]
    fn test_disabled_log_drops_records() {
        let log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(EventRecord::GameOver {
            score: 0,
            lines: 0,
            level: 0,
            pieces: 0,
        });
    }

    #[tokio::test]
    async fn test_writer_appends_lines() {
        let path = std::env::temp_dir().join(format!("blockfall-log-{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let log = EventLog::open(path.to_string_lossy().into_owned());
        log.record(EventRecord::Start {
            seed: 1,
            rows: 24,
            columns: 10,
            start_level: 0,
        });
        log.record(EventRecord::GameOver {
            score: 0,
            lines: 0,
            level: 0,
            pieces: 12,
        });
        log.close().await;

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"type\":\"start\""));
        assert!(lines[1].contains("\"pieces\":12"));
        let _ = std::fs::remove_file(&path);
    }
}
