//! Digest calculation for the GetFileHash core library
//!
//! This module contains the closed algorithm enumeration and the
//! streaming calculator that feeds a byte source to a digest
//! accumulator in fixed-size chunks.

use crate::error::{IoError, ValidationError};
use crate::progress::{ProgressProvider, ProgressUpdate};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;

mod algorithms;
mod traits;

pub use traits::{HashAlgorithmImpl, StreamingHasher};

/// Reference chunk size for streaming reads, in bytes
///
/// Small enough that progress updates stay responsive, large enough
/// that syscall overhead stays negligible.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Hash algorithms supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// MD5 digest (128 bit)
    Md5,
    /// SHA-1 digest (160 bit)
    Sha1,
    /// SHA-256 digest (256 bit)
    Sha256,
    /// SHA-384 digest (384 bit)
    Sha384,
    /// SHA-512 digest (512 bit)
    Sha512,
}

impl HashAlgorithm {
    /// All supported algorithms, in display order
    pub fn all() -> [HashAlgorithm; 5] {
        [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ]
    }

    /// Lowercase algorithm key, e.g. `sha256`
    pub fn key(&self) -> &'static str {
        self.implementation().id()
    }

    /// Canonical display label, e.g. `SHA-256`
    pub fn label(&self) -> &'static str {
        self.implementation().display_name()
    }

    /// Length of the hex digest this algorithm produces
    pub fn digest_len(&self) -> usize {
        self.implementation().digest_len()
    }

    fn implementation(&self) -> &'static dyn HashAlgorithmImpl {
        algorithms::implementation(*self)
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    /// Parse a user-facing label into an algorithm
    ///
    /// Normalization folds case and strips `-`/`_` separators, so
    /// `SHA-256`, `sha256` and `Sha_256` all resolve to the same key.
    /// Anything else is rejected before any I/O begins.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();

        match normalized.as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::Validation(ValidationError::unsupported_algorithm(s))),
        }
    }
}

/// Result of a completed hash calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    pub hash: String,
    pub input_size: u64,
    pub duration: Duration,
}

/// Streaming hash calculator
///
/// Owns nothing across requests: each call creates a fresh digest
/// accumulator and releases the source handle on every exit path.
#[derive(Debug, Clone)]
pub struct HashCalculator {
    chunk_size: usize,
}

impl HashCalculator {
    /// Create a calculator with the reference chunk size
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a calculator with a custom chunk size
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Calculate the digest of in-memory bytes in a single update
    pub fn hash_bytes(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<HashResult> {
        let start_time = Instant::now();
        let hash = algorithm.implementation().hash_bytes(data);

        Ok(HashResult {
            algorithm,
            hash,
            input_size: data.len() as u64,
            duration: start_time.elapsed(),
        })
    }

    /// Calculate the digest of text over its UTF-8 byte representation
    ///
    /// Text sources are assumed small and hashed in one step; no
    /// progress is reported. Empty text yields the valid empty-input
    /// digest.
    pub fn hash_text(&self, algorithm: HashAlgorithm, text: &str) -> Result<HashResult> {
        self.hash_bytes(algorithm, text.as_bytes())
    }

    /// Calculate the digest of a file without progress reporting
    pub async fn hash_file(&self, file_path: &Path, algorithm: HashAlgorithm) -> Result<HashResult> {
        self.hash_file_with_progress(
            file_path,
            algorithm,
            &crate::progress::NullProvider,
            &CancellationToken::new(),
        )
        .await
    }

    /// Calculate the digest of a file, streaming fixed-size chunks
    ///
    /// After each chunk the provider receives the byte counts when the
    /// total size is positive; zero-length files report nothing. The
    /// cancellation token is checked between chunk reads and surfaces
    /// as [`Error::Cancelled`].
    pub async fn hash_file_with_progress(
        &self,
        file_path: &Path,
        algorithm: HashAlgorithm,
        progress: &dyn ProgressProvider,
        cancel: &CancellationToken,
    ) -> Result<HashResult> {
        if self.chunk_size == 0 {
            return Err(Error::Validation(ValidationError::invalid_configuration(
                "chunk size must be positive",
            )));
        }

        let start_time = Instant::now();

        let metadata = tokio::fs::metadata(file_path)
            .await
            .map_err(|e| Error::Io(IoError::from_std(e).with_path(file_path)))?;
        if !metadata.is_file() {
            return Err(Error::Io(IoError::not_a_regular_file(file_path)));
        }
        let total_bytes = metadata.len();

        log::debug!(
            "hashing {} ({} bytes) with {algorithm}",
            file_path.display(),
            total_bytes
        );

        let mut file = File::open(file_path)
            .await
            .map_err(|e| Error::Io(IoError::from_std(e).with_path(file_path)))?;

        let mut hasher = algorithm.implementation().create_hasher();
        let mut buffer = vec![0u8; self.chunk_size];
        let mut bytes_hashed = 0u64;

        loop {
            if cancel.is_cancelled() {
                log::debug!("hash of {} cancelled", file_path.display());
                return Err(Error::Cancelled);
            }

            let n = file
                .read(&mut buffer)
                .await
                .map_err(|e| Error::Io(IoError::from_std(e).with_path(file_path)))?;
            if n == 0 {
                break;
            }

            hasher.update(&buffer[..n]);
            bytes_hashed += n as u64;

            if total_bytes > 0 {
                progress.report(ProgressUpdate {
                    bytes_hashed,
                    total_bytes,
                });
            }
        }

        let hash = hasher.finalize();

        Ok(HashResult {
            algorithm,
            hash,
            input_size: bytes_hashed,
            duration: start_time.elapsed(),
        })
    }
}

impl Default for HashCalculator {
    fn default() -> Self {
        Self::new()
    }
}
