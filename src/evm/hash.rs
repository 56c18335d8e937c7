//! Hash primitives used by the derivations.
//!
//! Ethereum started using Keccak and called it SHA3 before it was finalised. [`keccak256`]
//! is that original Keccak-256 (padding byte `0x01`), not NIST SHA3-256. The host ledger
//! keys storage with SHA-256, exposed as [`sha256`].
//!
//! Both functions take anything that is `AsRef<[u8]>`, so strings, vectors and fixed
//! arrays share one code path. The derivers reach the primitives through [`Hasher256`]
//! so an independently audited implementation can be dropped in.

use sha2::{Digest as _, Sha256};

use crate::types::{Checksum256, Digest, WORD_LEN};

/// The Keccak-256 hash of the empty string `""`.
pub const KECCAK_EMPTY: Digest = alloy_primitives::b256!(
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
);

/// A hash function with a 32-byte output.
pub trait Hasher256 {
    fn hash(&self, data: &[u8]) -> [u8; WORD_LEN];
}

/// Keccak-256 as used by Ethereum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

/// The host ledger's SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Hasher256 for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> [u8; WORD_LEN] {
        let mut hasher = alloy_primitives::Keccak256::new();
        hasher.update(data);
        hasher.finalize().0
    }
}

impl Hasher256 for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> [u8; WORD_LEN] {
        Sha256::digest(data).into()
    }
}

/// Keccak-256 digest of `data`.
pub fn keccak256(data: impl AsRef<[u8]>) -> Digest {
    Digest::new(Keccak256Hasher.hash(data.as_ref()))
}

/// SHA-256 digest of `data` as a host checksum.
pub fn sha256(data: impl AsRef<[u8]>) -> Checksum256 {
    Checksum256(Sha256Hasher.hash(data.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    mod keccak {
        use super::*;

        #[test]
        fn test_empty_string_vector() {
            assert_eq!(keccak256(""), KECCAK_EMPTY);
            assert_eq!(keccak256(Vec::<u8>::new()), KECCAK_EMPTY);
            assert_eq!(keccak256([0u8; 0]), KECCAK_EMPTY);
        }

        #[test]
        fn test_is_not_nist_sha3() {
            // NIST SHA3-256("") = a7ffc6f8...
            assert_ne!(
                keccak256(""),
                b256!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
            );
        }

        #[test]
        fn test_known_vectors() {
            assert_eq!(
                keccak256("abc"),
                b256!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
            );
            assert_eq!(
                keccak256(b"hello world"),
                b256!("47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad")
            );
        }

        #[test]
        fn test_input_shapes_agree() {
            let text = "bridge";
            let vec = text.as_bytes().to_vec();
            let arr: [u8; 6] = *b"bridge";
            assert_eq!(keccak256(text), keccak256(&vec));
            assert_eq!(keccak256(&vec), keccak256(arr));
            assert_eq!(keccak256(arr), keccak256(&arr[..]));
        }

        #[test]
        fn test_matches_alloy_keccak() {
            let data = [0x5au8; 300];
            assert_eq!(keccak256(data), alloy_primitives::keccak256(data));
        }
    }

    mod sha {
        use super::*;

        #[test]
        fn test_empty_vector() {
            assert_eq!(
                sha256([0u8; 0]).to_string(),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            );
        }

        #[test]
        fn test_different_inputs_differ() {
            assert_ne!(sha256("a"), sha256("b"));
            assert_ne!(sha256([0u8; 52]), sha256([0u8; 51]));
        }
    }
}
