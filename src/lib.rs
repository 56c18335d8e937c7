//! Key bridge between an EVM and a host ledger.
//!
//! Translates Ethereum addresses, words and Keccak-256 digests to and from the host's
//! fixed-width checksum keys, and derives CREATE contract addresses and storage-slot
//! keys. Every function is pure.

pub mod bridge;
pub mod config;
pub mod error;
pub mod evm;
pub mod types;

pub use bridge::Bridge;
pub use config::{ChainConfig, ChainId, CURRENT_CHAIN_ID};
pub use error::{BridgeError, Result};
pub use evm::address::{create_rlp, derive_contract_address, AddressDeriver, CreateEncoder};
pub use evm::checksum::{
    address_from_checksum, checksum_from_address, expand, narrow, pad_to_256,
    try_checksum_from_address, try_narrow, NarrowingMode,
};
pub use evm::codec::{from_bytes, to_bytes};
pub use evm::hash::{keccak256, sha256, Hasher256, KECCAK_EMPTY};
pub use evm::keys::{derive_storage_key, storage_key_preimage, KeyDeriver};
pub use types::{Address, Checksum160, Checksum256, Digest, StorageKey, Word, B256, U256};
