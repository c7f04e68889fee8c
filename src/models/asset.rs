//! Asset records and catalog lookups.

use alloy::primitives::Address;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An asset known to the wallet.
///
/// The `uuid` is the unique identity. The `ticker` is only a display symbol
/// and may collide across networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub uuid: Uuid,
    pub name: String,
    pub ticker: String,
    /// Number of decimal places between the smallest unit and one whole token
    pub decimal: u8,
    /// Token contract, absent for a network's base asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
}

impl Asset {
    /// Create an asset without a contract address.
    pub fn new(uuid: Uuid, name: impl Into<String>, ticker: impl Into<String>, decimal: u8) -> Self {
        Self {
            uuid,
            name: name.into(),
            ticker: ticker.into(),
            decimal,
            contract_address: None,
        }
    }

    /// Return a copy of this asset bound to a token contract.
    pub fn with_contract_address(self, contract_address: Address) -> Self {
        Self {
            contract_address: Some(contract_address),
            ..self
        }
    }
}

/// An asset as held by an account, with its balance in the smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldAsset {
    #[serde(flatten)]
    pub asset: Asset,
    pub balance: BigUint,
}

impl HeldAsset {
    pub fn new(asset: Asset, balance: BigUint) -> Self {
        Self { asset, balance }
    }
}

/// Lightweight asset reference used by the swap form's asset selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapAsset {
    pub uuid: Uuid,
    pub name: String,
    pub ticker: String,
}

impl SwapAsset {
    pub fn new(uuid: Uuid, name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            ticker: ticker.into(),
        }
    }
}

impl From<&Asset> for SwapAsset {
    fn from(asset: &Asset) -> Self {
        Self::new(asset.uuid, asset.name.clone(), asset.ticker.clone())
    }
}

/// Lookups over a collection of assets.
///
/// Both lookups return the first match in collection order.
pub trait AssetLookup {
    type Item;

    /// Find an asset by its unique id.
    fn get_by_uuid(&self, uuid: &Uuid) -> Option<&Self::Item>;

    /// Find an asset by exact ticker.
    fn get_by_ticker(&self, ticker: &str) -> Option<&Self::Item>;
}

impl AssetLookup for [Asset] {
    type Item = Asset;

    fn get_by_uuid(&self, uuid: &Uuid) -> Option<&Asset> {
        self.iter().find(|asset| asset.uuid == *uuid)
    }

    fn get_by_ticker(&self, ticker: &str) -> Option<&Asset> {
        self.iter().find(|asset| asset.ticker == ticker)
    }
}

impl AssetLookup for [HeldAsset] {
    type Item = HeldAsset;

    fn get_by_uuid(&self, uuid: &Uuid) -> Option<&HeldAsset> {
        self.iter().find(|held| held.asset.uuid == *uuid)
    }

    fn get_by_ticker(&self, ticker: &str) -> Option<&HeldAsset> {
        self.iter().find(|held| held.asset.ticker == ticker)
    }
}
