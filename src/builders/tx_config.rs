//! Builder pattern for TransactionConfig

use crate::errors::{ConfigError, Result};
use crate::models::{Account, Asset, RawTransaction, SwapAsset};
use crate::swap::{build_transaction_config, TransactionConfig};

/// Builder for creating TransactionConfig instances against a fixed asset catalog
#[derive(Debug, Clone)]
pub struct SwapTxConfigBuilder<'a> {
    assets: &'a [Asset],
    raw_transaction: Option<&'a RawTransaction>,
    account: Option<&'a Account>,
    from_asset: Option<&'a SwapAsset>,
    from_amount: Option<String>,
}

impl<'a> SwapTxConfigBuilder<'a> {
    /// Create a new SwapTxConfigBuilder bound to an asset catalog
    pub fn new(assets: &'a [Asset]) -> Self {
        Self {
            assets,
            raw_transaction: None,
            account: None,
            from_asset: None,
            from_amount: None,
        }
    }

    /// Set the unsigned transaction returned by the swap provider
    pub fn with_transaction(mut self, raw_transaction: &'a RawTransaction) -> Self {
        self.raw_transaction = Some(raw_transaction);
        self
    }

    /// Set the sending account
    pub fn with_account(mut self, account: &'a Account) -> Self {
        self.account = Some(account);
        self
    }

    /// Set the asset being swapped from
    pub fn with_from_asset(mut self, from_asset: &'a SwapAsset) -> Self {
        self.from_asset = Some(from_asset);
        self
    }

    /// Set the amount being swapped
    pub fn with_amount(mut self, from_amount: impl Into<String>) -> Self {
        self.from_amount = Some(from_amount.into());
        self
    }

    /// Build the TransactionConfig
    ///
    /// The builder is left untouched so that it can be reused for the next
    /// quote with only the changed inputs replaced.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if any input was not provided, or
    /// any error from [`build_transaction_config`].
    pub fn build(&self) -> Result<TransactionConfig> {
        let raw_transaction = self.raw_transaction
            .ok_or(ConfigError::MissingField { field: "raw_transaction" })?;
        let account = self.account
            .ok_or(ConfigError::MissingField { field: "account" })?;
        let from_asset = self.from_asset
            .ok_or(ConfigError::MissingField { field: "from_asset" })?;
        let from_amount = self.from_amount
            .as_deref()
            .ok_or(ConfigError::MissingField { field: "from_amount" })?;

        build_transaction_config(self.assets, raw_transaction, account, from_asset, from_amount)
    }
}
