//! SHA-384 hash algorithm implementation

use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use sha2::{Digest as Sha2Digest, Sha384};

pub struct Sha384Algorithm;

/// SHA-384 streaming hasher
struct Sha384StreamingHasher {
    hasher: Sha384,
}

impl Sha384StreamingHasher {
    fn new() -> Self {
        Self {
            hasher: Sha384::new(),
        }
    }
}

impl StreamingHasher for Sha384StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha2Digest::finalize(self.hasher))
    }
}

impl HashAlgorithmImpl for Sha384Algorithm {
    fn id(&self) -> &'static str {
        "sha384"
    }

    fn display_name(&self) -> &'static str {
        "SHA-384"
    }

    fn digest_len(&self) -> usize {
        96
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha384StreamingHasher::new())
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        let mut hasher = Sha384StreamingHasher::new();
        hasher.update(data);
        Box::new(hasher).finalize()
    }
}
