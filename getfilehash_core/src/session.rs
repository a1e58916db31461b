//! Execution and notification boundary
//!
//! One worker task per request. The worker owns the digest
//! accumulator and the source handle; the caller owns the receiving
//! end of a typed event channel. Within one request all progress
//! events precede the single terminal event, and nothing follows the
//! terminal event. Intermediate progress may be dropped under
//! backpressure; the final 100% and the terminal event are delivered
//! reliably.

use crate::hashing::{HashAlgorithm, HashCalculator};
use crate::progress::{ProgressProvider, ProgressUpdate};
use crate::{EngineConfig, Error};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// The byte source of a hash request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashSource {
    /// A file on disk, streamed in chunks with progress
    File(PathBuf),
    /// In-memory text, hashed over its UTF-8 bytes in one step
    Text(String),
}

/// Immutable description of one hash computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRequest {
    pub source: HashSource,
    pub algorithm: HashAlgorithm,
}

impl HashRequest {
    /// Request the digest of a file
    pub fn file(path: impl Into<PathBuf>, algorithm: HashAlgorithm) -> Self {
        Self {
            source: HashSource::File(path.into()),
            algorithm,
        }
    }

    /// Request the digest of a piece of text
    pub fn text(text: impl Into<String>, algorithm: HashAlgorithm) -> Self {
        Self {
            source: HashSource::Text(text.into()),
            algorithm,
        }
    }
}

/// Events delivered from a hash worker to its consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HashEvent {
    /// Fractional completion, integer percent in `[0, 100]`,
    /// non-decreasing within one request
    Progress { percent: u8 },
    /// Terminal success: canonical algorithm label and lowercase hex
    /// digest
    Completed {
        algorithm: String,
        digest: String,
        input_size: u64,
    },
    /// Terminal failure with a human-readable description
    Failed { message: String },
    /// Terminal outcome of an explicit cancellation
    Cancelled,
}

impl HashEvent {
    /// Whether this event ends the request's stream
    pub fn is_terminal(&self) -> bool {
        !matches!(self, HashEvent::Progress { .. })
    }
}

/// Handle to one in-flight hash computation
///
/// Dropping the handle detaches the worker; it stops at the next
/// chunk boundary once the channel closes and its token is cancelled.
pub struct HashTask {
    events: mpsc::Receiver<HashEvent>,
    cancel: CancellationToken,
}

impl HashTask {
    /// Spawn a worker for the given request
    pub fn spawn(request: HashRequest, config: EngineConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.event_buffer.max(1));
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        tokio::spawn(async move {
            run_worker(request, config, tx, worker_cancel).await;
        });

        Self { events: rx, cancel }
    }

    /// Receive the next event; `None` once the stream has ended
    pub async fn recv(&mut self) -> Option<HashEvent> {
        self.events.recv().await
    }

    /// Request cancellation of the in-flight computation
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Clone the cancellation token, e.g. to wire a Ctrl-C handler
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for HashTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Lossy progress forwarder used by the worker
struct EventProgress {
    tx: mpsc::Sender<HashEvent>,
}

impl ProgressProvider for EventProgress {
    fn report(&self, update: ProgressUpdate) {
        let _ = self.tx.try_send(HashEvent::Progress {
            percent: update.percent(),
        });
    }
}

async fn run_worker(
    request: HashRequest,
    config: EngineConfig,
    tx: mpsc::Sender<HashEvent>,
    cancel: CancellationToken,
) {
    let calculator = HashCalculator::with_chunk_size(config.chunk_size);

    let outcome = match &request.source {
        HashSource::Text(text) => calculator.hash_text(request.algorithm, text),
        HashSource::File(path) => {
            let progress = EventProgress { tx: tx.clone() };
            let result = calculator
                .hash_file_with_progress(path, request.algorithm, &progress, &cancel)
                .await;

            // Intermediate progress is lossy; the 100% mark is not.
            if let Ok(result) = &result {
                if result.input_size > 0 {
                    let _ = tx.send(HashEvent::Progress { percent: 100 }).await;
                }
            }
            result
        }
    };

    let terminal = match outcome {
        Ok(result) => HashEvent::Completed {
            algorithm: result.algorithm.label().to_string(),
            digest: result.hash,
            input_size: result.input_size,
        },
        Err(Error::Cancelled) => HashEvent::Cancelled,
        Err(err) => {
            log::warn!("hash request failed: {err}");
            HashEvent::Failed {
                message: err.to_string(),
            }
        }
    };

    let _ = tx.send(terminal).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn collect(mut task: HashTask) -> Vec<HashEvent> {
        let mut events = Vec::new();
        while let Some(event) = task.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_text_request_emits_single_completed() {
        let task = HashTask::spawn(
            HashRequest::text("abc", HashAlgorithm::Sha256),
            EngineConfig::default(),
        );

        let events = collect(task).await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            HashEvent::Completed {
                algorithm,
                digest,
                input_size,
            } => {
                assert_eq!(algorithm, "SHA-256");
                assert_eq!(
                    digest,
                    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
                );
                assert_eq!(*input_size, 3);
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_text_completes() {
        let task = HashTask::spawn(
            HashRequest::text("", HashAlgorithm::Md5),
            EngineConfig::default(),
        );

        let events = collect(task).await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            HashEvent::Completed { digest, .. } => {
                assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_stream_ends_with_terminal() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("data.bin");
        std::fs::write(&test_file, vec![7u8; 50 * 1024]).unwrap();

        let task = HashTask::spawn(
            HashRequest::file(&test_file, HashAlgorithm::Sha1),
            EngineConfig::test(),
        );

        let events = collect(task).await;
        let terminal_count = events.iter().filter(|e| e.is_terminal()).count();
        assert_eq!(terminal_count, 1);
        assert!(events.last().unwrap().is_terminal());

        // Progress values are non-decreasing and reach 100 before the end
        let percents: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                HashEvent::Progress { percent } => Some(*percent),
                _ => None,
            })
            .collect();
        assert!(!percents.is_empty());
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*percents.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn test_missing_file_fails_without_digest() {
        let task = HashTask::spawn(
            HashRequest::file("/no/such/file.bin", HashAlgorithm::Sha256),
            EngineConfig::default(),
        );

        let events = collect(task).await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            HashEvent::Failed { message } => {
                assert!(message.contains("File not found"));
                assert!(message.contains("/no/such/file.bin"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancel_before_first_chunk() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("cancel.bin");
        std::fs::write(&test_file, vec![1u8; 256 * 1024]).unwrap();

        let task = HashTask::spawn(
            HashRequest::file(&test_file, HashAlgorithm::Sha512),
            EngineConfig::test(),
        );
        // Current-thread runtime: the worker has not run yet, so the
        // token is observed before the first read.
        task.cancel();

        let events = collect(task).await;
        assert_eq!(events, vec![HashEvent::Cancelled]);
    }

    #[tokio::test]
    async fn test_invalid_config_surfaces_as_failed() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("zero.bin");
        std::fs::write(&test_file, b"content").unwrap();

        let config = EngineConfig {
            chunk_size: 0,
            ..EngineConfig::default()
        };
        let task = HashTask::spawn(HashRequest::file(&test_file, HashAlgorithm::Md5), config);

        let events = collect(task).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], HashEvent::Failed { .. }));
    }

    #[test]
    fn test_event_serialization() {
        let event = HashEvent::Progress { percent: 42 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"progress","percent":42}"#);

        let event = HashEvent::Completed {
            algorithm: "MD5".to_string(),
            digest: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
            input_size: 0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"completed""#));
        assert!(json.contains("d41d8cd9"));

        let json = serde_json::to_string(&HashEvent::Cancelled).unwrap();
        assert_eq!(json, r#"{"type":"cancelled"}"#);
    }

    #[test]
    fn test_request_constructors() {
        let request = HashRequest::file("/tmp/x", HashAlgorithm::Sha384);
        assert_eq!(request.source, HashSource::File(PathBuf::from("/tmp/x")));

        let request = HashRequest::text("hello", HashAlgorithm::Md5);
        assert_eq!(request.source, HashSource::Text("hello".to_string()));
    }
}
