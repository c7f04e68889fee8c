//! Wallet accounts.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AssetLookup, HeldAsset, Network};
use crate::wallet::WalletId;

/// An account added to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub uuid: Uuid,
    pub address: Address,
    pub network: Network,
    /// How the account signs transactions
    pub wallet: WalletId,
    /// Balances held by this account, in the smallest unit of each asset
    pub assets: Vec<HeldAsset>,
}

impl Account {
    /// Create an account with a fresh random id.
    pub fn new(address: Address, network: Network, wallet: WalletId, assets: Vec<HeldAsset>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            address,
            network,
            wallet,
            assets,
        }
    }

    /// Get the held balance of an asset, if the account holds it.
    pub fn held_asset(&self, uuid: &Uuid) -> Option<&HeldAsset> {
        self.assets.get_by_uuid(uuid)
    }
}
