//! Storage key derivation.
//!
//! A contract storage slot is addressed in the host table by
//! `sha256(address[0..20] ++ slot_be[0..32])`. The 52-byte preimage has a fixed layout,
//! so the key is recomputable from `(address, slot)` alone.

use tracing::trace;

use super::codec::to_bytes;
use super::hash::{Hasher256, Sha256Hasher};
use crate::types::{Checksum160, Checksum256, StorageKey, Word, ADDRESS_LEN, WORD_LEN};

/// Length of the storage key preimage.
pub const STORAGE_KEY_PREIMAGE_LEN: usize = ADDRESS_LEN + WORD_LEN;

/// Builds the 52-byte storage key preimage.
pub fn storage_key_preimage(
    address: Checksum160,
    slot: Word,
) -> [u8; STORAGE_KEY_PREIMAGE_LEN] {
    let mut out = [0u8; STORAGE_KEY_PREIMAGE_LEN];
    out[..ADDRESS_LEN].copy_from_slice(address.as_bytes());
    out[ADDRESS_LEN..].copy_from_slice(&to_bytes(slot));
    out
}

/// Derives storage keys with a pluggable hash; SHA-256 by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyDeriver<H = Sha256Hasher> {
    hasher: H,
}

impl<H: Hasher256> KeyDeriver<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Host table key of `slot` in the storage of `address`.
    pub fn derive(&self, address: impl Into<Checksum160>, slot: Word) -> StorageKey {
        let address = address.into();
        let preimage = storage_key_preimage(address, slot);
        let key = Checksum256(self.hasher.hash(&preimage));
        trace!(%address, %slot, %key, "derived storage key");
        key
    }
}

/// Host table key of `slot` in the storage of `address`, using SHA-256.
pub fn derive_storage_key(address: impl Into<Checksum160>, slot: Word) -> StorageKey {
    KeyDeriver::<Sha256Hasher>::default().derive(address, slot)
}
