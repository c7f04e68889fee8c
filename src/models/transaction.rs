//! Unsigned transactions as supplied by the swap provider.

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

/// An unsigned transaction with hex-encoded quantities.
///
/// Quantities are kept as the hex strings the provider returned so that they
/// can be passed on without loss. Conversions happen when a
/// [`TransactionConfig`](crate::swap::TransactionConfig) is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    pub value: String,
    pub data: Bytes,
    pub gas_price: String,
    pub gas_limit: String,
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl RawTransaction {
    /// Return a copy of this transaction bound to `chain_id`.
    pub fn with_chain_id(&self, chain_id: u64) -> Self {
        Self {
            chain_id: Some(chain_id),
            ..self.clone()
        }
    }
}
