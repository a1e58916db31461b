//! Progress reporting abstractions
//!
//! The engine reports raw byte counts through a trait so it stays
//! independent of any channel or UI concern; consumers derive the
//! integer percentage from the update.

use tokio::sync::mpsc;

/// Core trait for progress reporting
pub trait ProgressProvider: Send + Sync {
    /// Report a progress update
    fn report(&self, update: ProgressUpdate);
}

/// A single progress observation during a streaming hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Bytes fed to the digest accumulator so far
    pub bytes_hashed: u64,
    /// Total size of the byte source
    pub total_bytes: u64,
}

impl ProgressUpdate {
    /// Completion percentage as an integer in `[0, 100]`
    ///
    /// Truncates toward zero, so the value only reaches 100 once every
    /// byte has been consumed. A zero-length source counts as done.
    pub fn percent(&self) -> u8 {
        if self.total_bytes == 0 {
            return 100;
        }
        let percent = self.bytes_hashed * 100 / self.total_bytes;
        percent.min(100) as u8
    }
}

/// Null implementation for when no progress is needed
pub struct NullProvider;

impl ProgressProvider for NullProvider {
    fn report(&self, _update: ProgressUpdate) {
        // No-op: discard all progress updates
    }
}

/// Adapter that forwards updates into a tokio mpsc channel
///
/// Sends are non-blocking; an update is dropped when the channel is
/// full or the receiver is gone. Consumers must not assume one update
/// per chunk.
pub struct ChannelAdapter {
    tx: mpsc::Sender<ProgressUpdate>,
}

impl ChannelAdapter {
    /// Create a new adapter from an mpsc sender
    pub fn new(tx: mpsc::Sender<ProgressUpdate>) -> Self {
        Self { tx }
    }
}

impl ProgressProvider for ChannelAdapter {
    fn report(&self, update: ProgressUpdate) {
        let _ = self.tx.try_send(update);
    }
}
