//! Configuration management for swap account eligibility.
//!
//! The set of wallet types allowed to sign swaps can be narrowed or extended
//! through the environment instead of being fixed at compile time.

use crate::errors::{ConfigError, Result};
use crate::wallet::{SigningStep, WalletId, WalletRegistry};
use std::env;

/// Environment variable holding the supported wallet list
pub const SUPPORTED_WALLETS_VAR: &str = "SWAP_SUPPORTED_WALLETS";

/// Configuration for the swap flow's wallet support
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAssetsConfig {
    /// Wallet types allowed to sign swaps, with the step used for each
    pub supported_wallets: Vec<(WalletId, SigningStep)>,
}

impl Default for SwapAssetsConfig {
    fn default() -> Self {
        Self {
            supported_wallets: WalletId::ALL
                .iter()
                .filter_map(|&wallet| WalletRegistry::default_step(wallet).map(|step| (wallet, step)))
                .collect(),
        }
    }
}

impl SwapAssetsConfig {
    /// Create a new configuration from environment variables
    ///
    /// # Environment Variables
    ///
    /// ## Optional
    /// - `SWAP_SUPPORTED_WALLETS`: Comma-separated wallet ids, each optionally
    ///   followed by `:step` where step is `web3`, `hardware` or `walletConnect`
    ///   (e.g. `WEB3,TREZOR,PRIVATE_KEY:web3`). Ids without a step use their
    ///   default step. Defaults to every wallet type that has a default step.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list is empty
    /// - A wallet id is unknown (ids are case-sensitive)
    /// - A step name is unknown
    /// - A wallet id without an explicit step has no default step
    pub fn from_env() -> Result<Self> {
        tracing::info!("Loading swap wallet configuration from environment");

        let config = match env::var(SUPPORTED_WALLETS_VAR) {
            Ok(value) => {
                let supported_wallets = Self::parse_supported_wallets(&value)?;
                tracing::debug!(
                    wallet_count = supported_wallets.len(),
                    wallets = %value,
                    "Custom supported wallets loaded from environment"
                );
                Self { supported_wallets }
            }
            Err(_) => {
                tracing::debug!("SWAP_SUPPORTED_WALLETS not set, using default wallet support");
                Self::default()
            }
        };

        tracing::info!(
            wallet_count = config.supported_wallets.len(),
            "Swap wallet configuration loaded successfully"
        );

        Ok(config)
    }

    /// Build the wallet registry described by this configuration
    pub fn registry(&self) -> WalletRegistry {
        self.supported_wallets
            .iter()
            .fold(WalletRegistry::empty(), |registry, &(wallet, step)| registry.with_step(wallet, step))
    }

    /// Parse a comma-separated wallet list
    fn parse_supported_wallets(value: &str) -> Result<Vec<(WalletId, SigningStep)>> {
        let entries: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() {
            tracing::error!("SWAP_SUPPORTED_WALLETS is set but lists no wallets");
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must list at least one wallet id", SUPPORTED_WALLETS_VAR),
            }.into());
        }

        entries.into_iter().map(Self::parse_entry).collect()
    }

    /// Parse a single `ID` or `ID:step` entry
    fn parse_entry(entry: &str) -> Result<(WalletId, SigningStep)> {
        let (id, step) = match entry.split_once(':') {
            Some((id, step)) => (id.trim(), Some(step.trim())),
            None => (entry, None),
        };

        let wallet: WalletId = id.parse().map_err(|e| {
            tracing::error!(wallet = id, "Unknown wallet id in SWAP_SUPPORTED_WALLETS");
            e
        })?;

        let step = match step {
            Some(step) => Self::parse_step(step)?,
            None => WalletRegistry::default_step(wallet).ok_or_else(|| {
                ConfigError::InvalidConfiguration {
                    message: format!("{} has no default signing step; specify one as {}:<step>", wallet, wallet),
                }
            })?,
        };

        Ok((wallet, step))
    }

    fn parse_step(step: &str) -> Result<SigningStep> {
        match step {
            "web3" => Ok(SigningStep::Web3),
            "hardware" => Ok(SigningStep::Hardware),
            "walletConnect" => Ok(SigningStep::WalletConnect),
            _ => Err(ConfigError::InvalidConfiguration {
                message: format!("Invalid signing step: {}. Must be one of: web3, hardware, walletConnect", step),
            }.into()),
        }
    }
}
