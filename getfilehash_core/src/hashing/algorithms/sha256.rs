//! SHA-256 hash algorithm implementation

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use sha2::{Digest as Sha2Digest, Sha256};

pub struct Sha256Algorithm;

/// SHA-256 streaming hasher
struct Sha256StreamingHasher {
    hasher: Sha256,
}

impl Sha256StreamingHasher {
    fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }
}

impl StreamingHasher for Sha256StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha2Digest::finalize(self.hasher))
    }
}

impl HashAlgorithmImpl for Sha256Algorithm {
    fn id(&self) -> &'static str {
        "sha256"
    }

    fn display_name(&self) -> &'static str {
        "SHA-256"
    }

    fn digest_len(&self) -> usize {
        64
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha256StreamingHasher::new())
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        let mut hasher = Sha256StreamingHasher::new();
        hasher.update(data);
        Box::new(hasher).finalize()
    }
}
