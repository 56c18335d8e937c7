//! Chain configuration.
//!
//! All protocol constants are gathered in one read-only [`ChainConfig`] value. The
//! compiled-in defaults describe Ethereum mainnet; a test harness or deployment can load
//! another chain from TOML and pass that value around instead.
//!
//! ```toml
//! chain_id = 1337
//! narrowing = "strict"
//!
//! [gas]
//! tx_create = 53000
//! ```
//!
//! Sections and fields that are left out keep their defaults.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BridgeError, Result};
use crate::evm::checksum::NarrowingMode;
use crate::evm::gas::GasSchedule;
use crate::evm::limits::{ProcessorLimits, SignatureOffsets, TxLimits};

/// Named chain identifiers used for EIP-155 replay protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    PreEip155,
    EthereumMainnet,
    ExpanseMainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    Kovan,
    GethPrivateDefault,
}

/// The chain the contract is compiled for.
pub const CURRENT_CHAIN_ID: ChainId = ChainId::EthereumMainnet;

impl ChainId {
    /// Numeric chain id.
    pub const fn id(self) -> u64 {
        match self {
            ChainId::PreEip155 => 0,
            ChainId::EthereumMainnet => 1,
            ChainId::ExpanseMainnet => 2,
            ChainId::Ropsten => 3,
            ChainId::Rinkeby => 4,
            ChainId::Goerli => 5,
            ChainId::Kovan => 42,
            ChainId::GethPrivateDefault => 1337,
        }
    }

    pub const fn from_u64(id: u64) -> Option<Self> {
        match id {
            0 => Some(ChainId::PreEip155),
            1 => Some(ChainId::EthereumMainnet),
            2 => Some(ChainId::ExpanseMainnet),
            3 => Some(ChainId::Ropsten),
            4 => Some(ChainId::Rinkeby),
            5 => Some(ChainId::Goerli),
            42 => Some(ChainId::Kovan),
            1337 => Some(ChainId::GethPrivateDefault),
            _ => None,
        }
    }
}

impl TryFrom<u64> for ChainId {
    type Error = BridgeError;

    fn try_from(id: u64) -> Result<Self> {
        ChainId::from_u64(id).ok_or(BridgeError::UnknownChainId(id))
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

/// Every constant the bridge exposes to the interpreter and to transaction validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    /// How address words with non-zero high bytes are handled.
    pub narrowing: NarrowingMode,
    pub gas: GasSchedule,
    pub processor: ProcessorLimits,
    pub signatures: SignatureOffsets,
    pub tx: TxLimits,
}

impl ChainConfig {
    /// The configuration compiled into the contract.
    pub const DEFAULT: Self = Self {
        chain_id: CURRENT_CHAIN_ID,
        narrowing: NarrowingMode::Permissive,
        gas: GasSchedule::DEFAULT,
        processor: ProcessorLimits::DEFAULT,
        signatures: SignatureOffsets::DEFAULT,
        tx: TxLimits::DEFAULT,
    };

    /// Parses a configuration, falling back to defaults for missing fields.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ChainConfig = toml::from_str(input)?;
        debug!(
            chain_id = config.chain_id.id(),
            narrowing = ?config.narrowing,
            "loaded chain configuration"
        );
        Ok(config)
    }

    /// Same configuration on another chain.
    pub fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Same configuration with another narrowing mode.
    pub fn with_narrowing(mut self, narrowing: NarrowingMode) -> Self {
        self.narrowing = narrowing;
        self
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod chain_ids {
        use super::*;

        #[test]
        fn test_chain_id_literals() {
            assert_eq!(ChainId::PreEip155.id(), 0);
            assert_eq!(ChainId::EthereumMainnet.id(), 1);
            assert_eq!(ChainId::ExpanseMainnet.id(), 2);
            assert_eq!(ChainId::Ropsten.id(), 3);
            assert_eq!(ChainId::Rinkeby.id(), 4);
            assert_eq!(ChainId::Goerli.id(), 5);
            assert_eq!(ChainId::Kovan.id(), 42);
            assert_eq!(ChainId::GethPrivateDefault.id(), 1337);
            assert_eq!(CURRENT_CHAIN_ID, ChainId::EthereumMainnet);
        }

        #[test]
        fn test_from_u64_inverts_id() {
            for chain in [
                ChainId::PreEip155,
                ChainId::EthereumMainnet,
                ChainId::ExpanseMainnet,
                ChainId::Ropsten,
                ChainId::Rinkeby,
                ChainId::Goerli,
                ChainId::Kovan,
                ChainId::GethPrivateDefault,
            ] {
                assert_eq!(ChainId::from_u64(chain.id()), Some(chain));
            }
            assert_eq!(ChainId::try_from(6u64), Err(BridgeError::UnknownChainId(6)));
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn test_empty_toml_is_default() {
            let config = ChainConfig::from_toml_str("").unwrap();
            assert_eq!(config, ChainConfig::default());
            assert_eq!(config.narrowing, NarrowingMode::Permissive);
        }

        #[test]
        fn test_partial_override() {
            let config = ChainConfig::from_toml_str(
                r#"
                chain_id = 1337
                narrowing = "strict"

                [gas]
                tx_create = 53000

                [tx]
                max_tx_size = 1024
                "#,
            )
            .unwrap();

            assert_eq!(config.chain_id, ChainId::GethPrivateDefault);
            assert_eq!(config.narrowing, NarrowingMode::Strict);
            assert_eq!(config.gas.tx_create, 53000);
            assert_eq!(config.gas.transaction, 21000);
            assert_eq!(config.tx.max_tx_size, 1024);
            assert_eq!(config.tx.r_fixed_length, 32);
            assert_eq!(config.processor, ProcessorLimits::DEFAULT);
        }

        #[test]
        fn test_unknown_chain_is_rejected() {
            let err = ChainConfig::from_toml_str("chain_id = 7").unwrap_err();
            assert!(matches!(err, BridgeError::Config(msg) if msg.contains("unknown chain id: 7")));
        }

        #[test]
        fn test_loaded_extreme_gas_price_saturates() {
            let config =
                ChainConfig::from_toml_str("[gas]\ntx_data_non_zero = 9223372036854775807")
                    .unwrap();
            assert_eq!(config.gas.tx_data_non_zero, i64::MAX as u64);
            assert_eq!(config.gas.intrinsic_gas(&[1, 1], false), u64::MAX);
        }

        #[test]
        fn test_builders() {
            let config = ChainConfig::default()
                .with_chain_id(ChainId::Goerli)
                .with_narrowing(NarrowingMode::Strict);
            assert_eq!(config.chain_id.id(), 5);
            assert_eq!(config.narrowing, NarrowingMode::Strict);
            assert_eq!(config.gas, GasSchedule::DEFAULT);
        }

        #[test]
        fn test_toml_round_trip() {
            let config = ChainConfig::default().with_chain_id(ChainId::Kovan);
            let text = toml::to_string(&config).unwrap();
            assert_eq!(ChainConfig::from_toml_str(&text).unwrap(), config);
        }
    }
}
