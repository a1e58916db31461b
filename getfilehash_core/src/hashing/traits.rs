//! Core traits for the digest implementation seam

/// Core trait that all hash algorithms must implement
pub trait HashAlgorithmImpl: Send + Sync {
    /// Unique lowercase identifier for this algorithm
    fn id(&self) -> &'static str;

    /// Display label for user interfaces
    fn display_name(&self) -> &'static str;

    /// Length of the final digest in hex characters
    fn digest_len(&self) -> usize;

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Calculate hash for in-memory data
    fn hash_bytes(&self, data: &[u8]) -> String;
}

/// Trait for streaming hash calculation
pub trait StreamingHasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash calculation and return the lowercase hex digest
    fn finalize(self: Box<Self>) -> String;
}
