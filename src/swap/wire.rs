//! Wire encoding of a swap transaction.

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use super::TransactionConfig;
use crate::errors::Result;
use crate::utils::decimal_to_hex_string;

/// Transaction object handed to the signing layer.
///
/// `value` and `gas_price` are `0x`-prefixed hex. `gas_limit` and `nonce`
/// are copied from the [`TransactionConfig`] without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTransaction {
    pub to: Address,
    pub chain_id: u64,
    pub data: Bytes,
    pub value: String,
    pub gas_price: String,
    pub gas_limit: String,
    pub nonce: String,
}

impl WireTransaction {
    /// Render the transaction as JSON for the signing layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Encode a transaction configuration for signing and broadcast.
///
/// # Errors
///
/// Returns `ConversionError::InvalidInteger` if `amount` or `gas_price` is
/// not a non-negative base-10 integer string.
pub fn build_wire_transaction(config: &TransactionConfig) -> Result<WireTransaction> {
    Ok(WireTransaction {
        to: config.receiver_address,
        chain_id: config.network.chain_id,
        data: config.data.clone(),
        value: decimal_to_hex_string(&config.amount)?,
        gas_price: decimal_to_hex_string(&config.gas_price)?,
        gas_limit: config.gas_limit.clone(),
        nonce: config.nonce.clone(),
    })
}
