//! Common bridge types, re-exported from Alloy primitives.
//! All bridge modules should import types from here, not directly from Alloy.
//!
//! The host ledger identifies rows by fixed-width checksums. [`Checksum160`] carries an
//! account address and [`Checksum256`] carries storage keys and padded addresses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

// Re-export core Alloy types for use throughout the bridge.
pub use alloy_primitives::{Address, B256, U256};

/// The EVM "word" (256 bits).
pub type Word = U256;

/// Keccak-256 output. Opaque; compared and stored as raw bytes.
pub type Digest = B256;

/// Key of a contract storage slot in the host table.
pub type StorageKey = Checksum256;

/// Byte length of an address.
pub const ADDRESS_LEN: usize = 20;

/// Byte length of a word.
pub const WORD_LEN: usize = 32;

/// Offset of the address bytes inside a 32-byte word.
pub const ADDRESS_OFFSET: usize = WORD_LEN - ADDRESS_LEN;

/// Host-native 160-bit checksum, used as the account key.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Checksum160(pub [u8; ADDRESS_LEN]);

/// Host-native 256-bit checksum, used as storage key and padded address.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Checksum256(pub [u8; WORD_LEN]);

impl Checksum160 {
    /// The all-zero address checksum.
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Builds a checksum from a 20-byte slice.
    ///
    /// # Panics
    /// Panics if `bytes` is not exactly 20 bytes long. Use [`Checksum160::try_from`]
    /// for untrusted input.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(
            bytes.len(),
            ADDRESS_LEN,
            "checksum160 requires {ADDRESS_LEN} bytes"
        );
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(bytes);
        Self(out)
    }

    /// The raw 20 checksum bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl Checksum256 {
    /// The all-zero 256-bit checksum.
    pub const ZERO: Self = Self([0u8; WORD_LEN]);

    /// Builds a checksum from a 32-byte slice.
    ///
    /// # Panics
    /// Panics if `bytes` is not exactly 32 bytes long. Use [`Checksum256::try_from`]
    /// for untrusted input.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), WORD_LEN, "checksum256 requires {WORD_LEN} bytes");
        let mut out = [0u8; WORD_LEN];
        out.copy_from_slice(bytes);
        Self(out)
    }

    /// The raw 32 checksum bytes.
    pub fn as_bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Checksum160 {
    type Error = BridgeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; ADDRESS_LEN] =
            bytes.try_into().map_err(|_| BridgeError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }
}

impl TryFrom<&[u8]> for Checksum256 {
    type Error = BridgeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; WORD_LEN] = bytes.try_into().map_err(|_| BridgeError::InvalidLength {
            expected: WORD_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }
}

impl From<Address> for Checksum160 {
    fn from(address: Address) -> Self {
        Self(address.0 .0)
    }
}

impl From<Checksum160> for Address {
    fn from(checksum: Checksum160) -> Self {
        Address::new(checksum.0)
    }
}

impl From<B256> for Checksum256 {
    fn from(value: B256) -> Self {
        Self(value.0)
    }
}

impl From<Checksum256> for B256 {
    fn from(value: Checksum256) -> Self {
        B256::new(value.0)
    }
}

impl AsRef<[u8]> for Checksum160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Checksum256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Checksum160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Checksum160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum160({self})")
    }
}

impl fmt::Display for Checksum256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Checksum256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum256({self})")
    }
}
