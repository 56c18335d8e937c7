//! Configured entry point for account and storage code.
//!
//! [`Bridge`] binds the pure conversions and derivations to one [`ChainConfig`], so the
//! narrowing policy and limits come from the injected configuration rather than from
//! globals.

use crate::config::ChainConfig;
use crate::error::Result;
use crate::evm::address::AddressDeriver;
use crate::evm::checksum::{self, narrow_with};
use crate::evm::codec::to_bytes;
use crate::evm::keys::KeyDeriver;
use crate::types::{Address, Checksum160, Checksum256, StorageKey, Word};

#[derive(Debug, Clone, Copy, Default)]
pub struct Bridge {
    config: ChainConfig,
    keys: KeyDeriver,
    addresses: AddressDeriver,
}

impl Bridge {
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            keys: KeyDeriver::default(),
            addresses: AddressDeriver::default(),
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Word form of a host address checksum.
    pub fn address_from_checksum(&self, checksum: Checksum160) -> Word {
        checksum::address_from_checksum(checksum)
    }

    /// Host checksum of an address word, narrowed per the configured mode.
    pub fn checksum_from_address(&self, address: Word) -> Result<Checksum160> {
        narrow_with(self.config.narrowing, to_bytes(address))
    }

    /// Host 256-bit form of an address checksum.
    pub fn padded_address(&self, checksum: Checksum160) -> Checksum256 {
        checksum::pad_to_256(checksum)
    }

    /// Storage table key of `slot` under `address`.
    pub fn storage_key(&self, address: impl Into<Checksum160>, slot: Word) -> StorageKey {
        self.keys.derive(address, slot)
    }

    /// Address of the contract created by `sender` at `nonce`.
    pub fn contract_address(&self, sender: Address, nonce: Word) -> Address {
        self.addresses.derive(sender, nonce)
    }

    /// Validates a transaction's size and returns its intrinsic gas.
    ///
    /// Both the raw encoding length and the data payload must fit `max_tx_size`.
    pub fn intrinsic_gas(&self, raw_len: usize, data: &[u8], is_create: bool) -> Result<u64> {
        self.config.tx.check_size(raw_len.max(data.len()))?;
        Ok(self.config.gas.intrinsic_gas(data, is_create))
    }
}
