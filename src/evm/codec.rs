//! Numeric codec between 256-bit words and their big-endian byte form.
//!
//! Every bit pattern is a valid [`Word`], so both directions are total. The byte form is
//! always exactly 32 bytes, left-padded with zeros.

use crate::error::{BridgeError, Result};
use crate::types::{Word, WORD_LEN};

/// Encodes a word as 32 big-endian bytes.
pub fn to_bytes(word: Word) -> [u8; WORD_LEN] {
    word.to_be_bytes()
}

/// Decodes 32 big-endian bytes into a word.
pub fn from_bytes(bytes: [u8; WORD_LEN]) -> Word {
    Word::from_be_bytes(bytes)
}

/// Decodes a 32-byte big-endian slice.
///
/// # Panics
/// Panics if `bytes` is not exactly 32 bytes long.
pub fn from_be_slice(bytes: &[u8]) -> Word {
    assert_eq!(bytes.len(), WORD_LEN, "word requires {WORD_LEN} bytes");
    Word::from_be_slice(bytes)
}

/// Length-checked variant of [`from_be_slice`].
pub fn try_from_be_slice(bytes: &[u8]) -> Result<Word> {
    let raw: [u8; WORD_LEN] = bytes.try_into().map_err(|_| BridgeError::InvalidLength {
        expected: WORD_LEN,
        actual: bytes.len(),
    })?;
    Ok(from_bytes(raw))
}

/// Two's-complement sign of a word: `-1` when bit 255 is set, `1` otherwise.
pub fn word_sign(word: Word) -> i8 {
    if word.bit(255) {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_value_is_left_padded() {
        let bytes = to_bytes(Word::from(0x0102u64));
        assert_eq!(&bytes[..30], &[0u8; 30]);
        assert_eq!(bytes[30], 0x01);
        assert_eq!(bytes[31], 0x02);
    }

    #[test]
    fn test_max_word_round_trips() {
        let bytes = to_bytes(Word::MAX);
        assert_eq!(bytes, [0xff; 32]);
        assert_eq!(from_bytes(bytes), Word::MAX);
    }

    #[test]
    fn test_byte_order_is_big_endian() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x80;
        assert_eq!(from_bytes(bytes), Word::from(1u8) << 255);
    }

    #[test]
    fn test_try_from_be_slice_checks_length() {
        assert_eq!(
            try_from_be_slice(&[0u8; 20]),
            Err(BridgeError::InvalidLength {
                expected: 32,
                actual: 20
            })
        );
        assert_eq!(try_from_be_slice(&[0xff; 32]), Ok(Word::MAX));
    }

    #[test]
    #[should_panic(expected = "word requires 32 bytes")]
    fn test_from_be_slice_panics_on_short_input() {
        let _ = from_be_slice(&[1u8; 31]);
    }

    #[test]
    fn test_word_sign() {
        assert_eq!(word_sign(Word::ZERO), 1);
        assert_eq!(word_sign(Word::from(42u64)), 1);
        assert_eq!(word_sign(Word::MAX), -1);
        assert_eq!(word_sign(Word::from(1u8) << 255), -1);
        assert_eq!(word_sign((Word::from(1u8) << 255) - Word::from(1u8)), 1);
    }
}
