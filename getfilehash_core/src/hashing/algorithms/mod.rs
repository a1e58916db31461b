//! Hash algorithm implementations
//!
//! Dispatch is a compile-time match over the closed [`HashAlgorithm`]
//! enum; every variant maps to exactly one implementation, so an
//! unsupported label can only be rejected at parse time, never here.

use super::traits::HashAlgorithmImpl;
use crate::hashing::HashAlgorithm;

mod md5;
mod sha1;
mod sha256;
mod sha384;
mod sha512;

/// Resolve the implementation for an algorithm variant
pub(crate) fn implementation(algorithm: HashAlgorithm) -> &'static dyn HashAlgorithmImpl {
    match algorithm {
        HashAlgorithm::Md5 => &md5::Md5Algorithm,
        HashAlgorithm::Sha1 => &sha1::Sha1Algorithm,
        HashAlgorithm::Sha256 => &sha256::Sha256Algorithm,
        HashAlgorithm::Sha384 => &sha384::Sha384Algorithm,
        HashAlgorithm::Sha512 => &sha512::Sha512Algorithm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_resolves() {
        for algorithm in HashAlgorithm::all() {
            let resolved = implementation(algorithm);
            assert_eq!(resolved.id(), algorithm.key());
            assert_eq!(resolved.display_name(), algorithm.label());
        }
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(implementation(HashAlgorithm::Md5).digest_len(), 32);
        assert_eq!(implementation(HashAlgorithm::Sha1).digest_len(), 40);
        assert_eq!(implementation(HashAlgorithm::Sha256).digest_len(), 64);
        assert_eq!(implementation(HashAlgorithm::Sha384).digest_len(), 96);
        assert_eq!(implementation(HashAlgorithm::Sha512).digest_len(), 128);
    }
}
