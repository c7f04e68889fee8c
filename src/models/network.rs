use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A network an account lives on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    /// EIP-155 chain id embedded in signed transactions
    pub chain_id: u64,
    /// Catalog id of the native asset used to pay gas
    pub base_asset: Uuid,
}

impl Network {
    pub fn new(id: impl Into<String>, name: impl Into<String>, chain_id: u64, base_asset: Uuid) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chain_id,
            base_asset,
        }
    }
}
