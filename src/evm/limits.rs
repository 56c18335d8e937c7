//! Size and depth ceilings, and the signature V offsets.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Interpreter ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorLimits {
    pub max_call_depth: u32,
    pub word_size: u32,
    /// In bytes (32 MB).
    pub max_mem_size: u64,
}

impl ProcessorLimits {
    pub const DEFAULT: Self = Self {
        max_call_depth: 1024,
        word_size: 32,
        max_mem_size: 1 << 25,
    };
}

impl Default for ProcessorLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// First V value of legacy and of EIP-155 signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureOffsets {
    pub pre_155_v_start: u64,
    pub post_155_v_start: u64,
}

impl SignatureOffsets {
    pub const DEFAULT: Self = Self {
        pre_155_v_start: 27,
        post_155_v_start: 35,
    };
}

impl Default for SignatureOffsets {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw transaction limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxLimits {
    /// Byte length of the signature R value.
    pub r_fixed_length: usize,
    /// 128 KB until EIP-2464.
    pub max_tx_size: usize,
}

impl TxLimits {
    pub const DEFAULT: Self = Self {
        r_fixed_length: 32,
        max_tx_size: 128 * 1024,
    };

    /// Rejects raw transactions above `max_tx_size`.
    pub fn check_size(&self, size: usize) -> Result<()> {
        if size > self.max_tx_size {
            return Err(BridgeError::TransactionTooLarge {
                size,
                max: self.max_tx_size,
            });
        }
        Ok(())
    }
}

impl Default for TxLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
