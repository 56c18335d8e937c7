//! EVM Gas Schedule
//!
//! Fixed per-operation gas prices consumed by the interpreter and by transaction
//! validation. The literals follow the Ethereum Yellow Paper (Istanbul data pricing) and
//! must not drift: consumers rely on them for protocol compatibility.
//!
//! Only the pre-execution charge of a transaction is computed here; metering during
//! execution belongs to the interpreter.

use serde::{Deserialize, Serialize};

/// The fixed gas prices of the bridge's EVM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSchedule {
    /// Price of one unit of gas, in the host token's smallest unit.
    pub gas_price: u64,
    /// Base cost of every transaction.
    pub transaction: u64,
    /// Cost per zero byte of transaction data.
    pub tx_data_zero: u64,
    /// Cost per non-zero byte of transaction data.
    pub tx_data_non_zero: u64,
    /// Extra cost of a contract-creation transaction.
    pub tx_create: u64,
    /// Cost of bringing a new account into existence.
    pub new_account: u64,
    /// Cost per word copied.
    pub copy: u64,
    /// Cost of a call that transfers value.
    pub call_value_transfer: u64,
    /// Gas handed to the callee of a value-transferring call.
    pub call_stipend: u64,
    /// Cost per word hashed by KECCAK256.
    pub sha3_word: u64,
    /// Cost per byte of an EXP exponent.
    pub exp_byte: u64,
}

impl GasSchedule {
    /// The schedule compiled into the contract.
    pub const DEFAULT: Self = Self {
        gas_price: 1,
        transaction: 21_000,
        tx_data_zero: 4,
        tx_data_non_zero: 16,
        tx_create: 32_000,
        new_account: 25_000,
        copy: 3,
        call_value_transfer: 9_000,
        call_stipend: 2_300,
        sha3_word: 6,
        exp_byte: 50,
    };

    /// Gas charged for the bytes of `data`. Saturates at `u64::MAX`.
    pub fn data_cost(&self, data: &[u8]) -> u64 {
        let zeros = data.iter().filter(|b| **b == 0).count() as u64;
        let non_zeros = (data.len() as u64).saturating_sub(zeros);
        zeros
            .saturating_mul(self.tx_data_zero)
            .saturating_add(non_zeros.saturating_mul(self.tx_data_non_zero))
    }

    /// Gas charged before execution for a transaction carrying `data`. Saturates at
    /// `u64::MAX`.
    pub fn intrinsic_gas(&self, data: &[u8], is_create: bool) -> u64 {
        let create = if is_create { self.tx_create } else { 0 };
        self.transaction
            .saturating_add(create)
            .saturating_add(self.data_cost(data))
    }
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}
