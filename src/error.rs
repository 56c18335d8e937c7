//! Errors surfaced by the bridge.
//!
//! Conversions between fixed-width values are total; only strict address narrowing,
//! length-checked constructors, size policy checks and configuration loading can fail.

use thiserror::Error;

/// Recoverable bridge failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A 256-bit value had non-zero bytes above the 160-bit address range.
    #[error("non-canonical address word: high bytes 0x{} are not zero", hex::encode(.high_bytes))]
    NonCanonicalAddress { high_bytes: [u8; 12] },

    /// A fixed-width value was built from a buffer of the wrong size.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A raw transaction exceeded the configured size ceiling.
    #[error("transaction of {size} bytes exceeds limit of {max} bytes")]
    TransactionTooLarge { size: usize, max: usize },

    /// A numeric chain id with no named counterpart.
    #[error("unknown chain id: {0}")]
    UnknownChainId(u64),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BridgeError>;

impl From<toml::de::Error> for BridgeError {
    fn from(err: toml::de::Error) -> Self {
        BridgeError::Config(format!("TOML parsing error: {}", err))
    }
}
