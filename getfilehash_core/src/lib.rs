//! GetFileHash Core Library
//!
//! Streaming digest engine: feeds a file or a piece of text to a
//! digest accumulator in fixed-size chunks, reports integer progress,
//! and delivers exactly one terminal event per request over a typed
//! channel, off the interactive thread.

pub mod error;
pub mod hashing;
pub mod progress;
pub mod session;
pub mod slot;

// Re-export main types
pub use error::{Error, Result};
pub use hashing::{
    DEFAULT_CHUNK_SIZE, HashAlgorithm, HashAlgorithmImpl, HashCalculator, HashResult,
    StreamingHasher,
};
pub use progress::{ChannelAdapter, NullProvider, ProgressProvider, ProgressUpdate};
pub use session::{HashEvent, HashRequest, HashSource, HashTask};
pub use slot::{HashSlot, SlotState};

/// Core engine configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Bytes read per chunk while streaming a file
    pub chunk_size: usize,
    /// Capacity of the worker-to-consumer event channel
    pub event_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            event_buffer: 64,
        }
    }
}

impl EngineConfig {
    /// Create a test configuration with small chunks
    pub fn test() -> Self {
        Self {
            chunk_size: 1024,
            event_buffer: 256,
        }
    }
}
