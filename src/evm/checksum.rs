//! Checksum bridge between host key types and EVM words.
//!
//! Ethereum stores a 160-bit address inside a 256-bit slot with twelve leading zero
//! bytes. The host ledger keys accounts by a 20-byte [`Checksum160`]. This module moves
//! values across that boundary.
//!
//! # Layout
//! ```text
//! word:     [ 0 0 0 0 0 0 0 0 0 0 0 0 | a0 a1 ... a19 ]
//!             bytes 0..12 (zero)        bytes 12..32 (checksum)
//! ```
//!
//! [`narrow`] keeps the historical permissive behaviour and drops whatever sits in the
//! high twelve bytes. [`try_narrow`] rejects such words instead.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::codec::{from_bytes, to_bytes};
use crate::error::{BridgeError, Result};
use crate::types::{
    Address, Checksum160, Checksum256, Word, ADDRESS_LEN, ADDRESS_OFFSET, WORD_LEN,
};

/// How a 32-byte value is narrowed to a 160-bit checksum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowingMode {
    /// Drop the high twelve bytes without inspecting them.
    #[default]
    Permissive,
    /// Reject values whose high twelve bytes are not zero.
    Strict,
}

/// Places the checksum bytes at offset 12 of a zeroed 32-byte buffer.
pub fn expand(checksum: Checksum160) -> [u8; WORD_LEN] {
    let mut out = [0u8; WORD_LEN];
    out[ADDRESS_OFFSET..].copy_from_slice(checksum.as_bytes());
    out
}

/// Takes bytes 12..32 of `bytes`, discarding the high twelve bytes.
pub fn narrow(bytes: [u8; WORD_LEN]) -> Checksum160 {
    let (high, low) = bytes.split_at(ADDRESS_OFFSET);
    if high.iter().any(|b| *b != 0) {
        warn!(
            high_bytes = %hex::encode(high),
            "narrowing discarded non-zero high bytes of address word"
        );
    }
    Checksum160::from_slice(low)
}

/// Takes bytes 12..32 of `bytes`, failing if any of bytes 0..12 is non-zero.
pub fn try_narrow(bytes: [u8; WORD_LEN]) -> Result<Checksum160> {
    let mut high_bytes = [0u8; ADDRESS_OFFSET];
    high_bytes.copy_from_slice(&bytes[..ADDRESS_OFFSET]);
    if high_bytes != [0u8; ADDRESS_OFFSET] {
        return Err(BridgeError::NonCanonicalAddress { high_bytes });
    }
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(&bytes[ADDRESS_OFFSET..]);
    Ok(Checksum160(out))
}

/// Narrows using the given mode.
pub fn narrow_with(mode: NarrowingMode, bytes: [u8; WORD_LEN]) -> Result<Checksum160> {
    match mode {
        NarrowingMode::Permissive => Ok(narrow(bytes)),
        NarrowingMode::Strict => try_narrow(bytes),
    }
}

/// Word form of a host address checksum.
pub fn address_from_checksum(checksum: Checksum160) -> Word {
    from_bytes(expand(checksum))
}

/// Host checksum of an address word. High bits above 160 are dropped.
pub fn checksum_from_address(address: Word) -> Checksum160 {
    narrow(to_bytes(address))
}

/// Strict counterpart of [`checksum_from_address`].
pub fn try_checksum_from_address(address: Word) -> Result<Checksum160> {
    try_narrow(to_bytes(address))
}

/// Pads a 160-bit checksum into the 256-bit host checksum type.
pub fn pad_to_256(checksum: Checksum160) -> Checksum256 {
    Checksum256(expand(checksum))
}

/// Host 256-bit checksum holding the big-endian bytes of `word`.
pub fn checksum256_from_word(word: Word) -> Checksum256 {
    Checksum256(to_bytes(word))
}

/// Word form of an address.
pub fn address_to_word(address: Address) -> Word {
    address_from_checksum(address.into())
}

/// Address held in the low 160 bits of `word`.
pub fn word_to_address(word: Word) -> Address {
    checksum_from_address(word).into()
}
