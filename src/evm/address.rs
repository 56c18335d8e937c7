//! Contract address derivation for CREATE.
//!
//! The new address is the low 20 bytes of `keccak256(rlp([sender, nonce]))`, with the
//! sender encoded as a 20-byte string and the nonce as a minimal big-endian integer
//! (zero is the empty string). This must match Ethereum bit for bit.

use alloy_rlp::{Encodable, Header};
use tracing::trace;

use super::hash::{Hasher256, Keccak256Hasher};
use crate::types::{Address, Word, ADDRESS_OFFSET};

/// Serializes the `(sender, nonce)` pair hashed by CREATE.
pub trait CreateEncoder {
    fn encode_create(&self, sender: &Address, nonce: &Word) -> Vec<u8>;
}

/// RLP list encoding backed by `alloy-rlp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RlpCreateEncoder;

impl CreateEncoder for RlpCreateEncoder {
    fn encode_create(&self, sender: &Address, nonce: &Word) -> Vec<u8> {
        let header = Header {
            list: true,
            payload_length: sender.length() + nonce.length(),
        };
        let mut out = Vec::with_capacity(header.length() + header.payload_length);
        header.encode(&mut out);
        sender.encode(&mut out);
        nonce.encode(&mut out);
        out
    }
}

/// RLP encoding of `[sender, nonce]`.
pub fn create_rlp(sender: &Address, nonce: &Word) -> Vec<u8> {
    RlpCreateEncoder.encode_create(sender, nonce)
}

/// Derives CREATE addresses with pluggable encoding and hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressDeriver<E = RlpCreateEncoder, H = Keccak256Hasher> {
    encoder: E,
    hasher: H,
}

impl<E: CreateEncoder, H: Hasher256> AddressDeriver<E, H> {
    pub fn new(encoder: E, hasher: H) -> Self {
        Self { encoder, hasher }
    }

    /// Address of the contract created by `sender` at `nonce`.
    pub fn derive(&self, sender: Address, nonce: Word) -> Address {
        let encoded = self.encoder.encode_create(&sender, &nonce);
        let digest = self.hasher.hash(&encoded);
        let created = Address::from_slice(&digest[ADDRESS_OFFSET..]);
        trace!(%sender, %nonce, %created, "derived contract address");
        created
    }
}

/// Address of the contract created by `sender` at `nonce`.
pub fn derive_contract_address(sender: Address, nonce: Word) -> Address {
    AddressDeriver::<RlpCreateEncoder, Keccak256Hasher>::default().derive(sender, nonce)
}
