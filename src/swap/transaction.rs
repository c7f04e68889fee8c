//! Transaction configuration for a swap.

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::errors::{AssetError, Result};
use crate::models::{Account, Asset, AssetLookup, Network, RawTransaction, SwapAsset};
use crate::utils::hex_to_decimal_string;

/// How the swapped asset was resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetSource {
    /// The requested ticker was found in the catalog
    Catalog,
    /// The ticker was unknown and the network's base asset was used instead
    BaseAssetFallback,
}

/// Normalized view of a swap transaction, ready for review and signing.
///
/// Gas price, gas limit and nonce are base-10 strings. `amount` and `value`
/// are the requested amount exactly as supplied. `raw_transaction` is the
/// provider's transaction bound to the network's chain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConfig {
    pub from: Address,
    pub amount: String,
    pub receiver_address: Address,
    pub sender_account: Account,
    pub network: Network,
    pub asset: Asset,
    pub asset_source: AssetSource,
    pub base_asset: Asset,
    pub gas_price: String,
    pub gas_limit: String,
    pub value: String,
    pub nonce: String,
    pub data: Bytes,
    pub raw_transaction: RawTransaction,
}

impl TransactionConfig {
    /// Chain id the transaction is bound to.
    pub fn chain_id(&self) -> u64 {
        self.network.chain_id
    }

    /// Whether the swapped asset fell back to the network's base asset.
    pub fn used_base_asset_fallback(&self) -> bool {
        self.asset_source == AssetSource::BaseAssetFallback
    }
}

/// Build the transaction configuration for a swap.
///
/// The base asset is looked up by the account network's base asset id and
/// must exist. The swapped asset is looked up by `from_asset.ticker`; an
/// unknown ticker resolves to the base asset and is recorded as
/// [`AssetSource::BaseAssetFallback`]. Sender and receiver are both the
/// account's address.
///
/// # Errors
///
/// - `AssetError::AssetNotFound` if the base asset is missing from `assets`
/// - `ConversionError::InvalidHexQuantity` if gas price, gas limit or nonce
///   are not hex quantities
pub fn build_transaction_config(
    assets: &[Asset],
    raw_transaction: &RawTransaction,
    account: &Account,
    from_asset: &SwapAsset,
    from_amount: &str,
) -> Result<TransactionConfig> {
    let network = &account.network;

    let base_asset = assets
        .get_by_uuid(&network.base_asset)
        .ok_or(AssetError::AssetNotFound { uuid: network.base_asset })?;

    let (asset, asset_source) = match assets.get_by_ticker(&from_asset.ticker) {
        Some(asset) => (asset, AssetSource::Catalog),
        None => {
            tracing::debug!(
                ticker = %from_asset.ticker,
                base_asset = %base_asset.ticker,
                network = %network.id,
                "Swap asset not in catalog, falling back to base asset"
            );
            (base_asset, AssetSource::BaseAssetFallback)
        }
    };

    let gas_price = hex_to_decimal_string(&raw_transaction.gas_price)?;
    let gas_limit = hex_to_decimal_string(&raw_transaction.gas_limit)?;
    let nonce = hex_to_decimal_string(&raw_transaction.nonce)?;

    Ok(TransactionConfig {
        from: account.address,
        amount: from_amount.to_string(),
        receiver_address: account.address,
        sender_account: account.clone(),
        network: network.clone(),
        asset: asset.clone(),
        asset_source,
        base_asset: base_asset.clone(),
        gas_price,
        gas_limit,
        value: from_amount.to_string(),
        nonce,
        data: raw_transaction.data.clone(),
        raw_transaction: raw_transaction.with_chain_id(network.chain_id),
    })
}
