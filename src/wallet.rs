//! Wallet types and their swap signing capability.
//!
//! An account is only usable in the swap flow if its wallet type has a
//! signing step. The mapping from wallet type to signing step is provided
//! through the [`WalletSupport`] trait; [`WalletRegistry`] is the concrete
//! table used by default and by [`SwapAssetsConfig`](crate::config::SwapAssetsConfig).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use crate::errors::{ConfigError, SwapError};

/// Wallet types an account can be added with.
///
/// Identifiers are the upper-case strings used in stored accounts and in
/// configuration. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletId {
    Web3,
    Metamask,
    LedgerNanoS,
    Trezor,
    Walletconnect,
    KeystoreFile,
    PrivateKey,
    MnemonicPhrase,
    ViewOnly,
}

impl WalletId {
    /// All known wallet ids.
    pub const ALL: [WalletId; 9] = [
        WalletId::Web3,
        WalletId::Metamask,
        WalletId::LedgerNanoS,
        WalletId::Trezor,
        WalletId::Walletconnect,
        WalletId::KeystoreFile,
        WalletId::PrivateKey,
        WalletId::MnemonicPhrase,
        WalletId::ViewOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletId::Web3 => "WEB3",
            WalletId::Metamask => "METAMASK",
            WalletId::LedgerNanoS => "LEDGER_NANO_S",
            WalletId::Trezor => "TREZOR",
            WalletId::Walletconnect => "WALLETCONNECT",
            WalletId::KeystoreFile => "KEYSTORE_FILE",
            WalletId::PrivateKey => "PRIVATE_KEY",
            WalletId::MnemonicPhrase => "MNEMONIC_PHRASE",
            WalletId::ViewOnly => "VIEW_ONLY",
        }
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletId {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownWalletId { id: s.to_string() }.into())
    }
}

/// Whether an optional string names a known wallet id.
///
/// `Some("WEB3")` is valid; `Some("web3")` and `None` are not.
pub fn is_valid_wallet_id(id: Option<&str>) -> bool {
    id.map_or(false, |id| id.parse::<WalletId>().is_ok())
}

/// The step the swap flow uses to get a transaction signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SigningStep {
    /// Injected browser provider signs and broadcasts
    Web3,
    /// Hardware device signs, wallet broadcasts
    Hardware,
    /// Remote wallet signs over a WalletConnect session
    WalletConnect,
}

/// Capability lookup: which wallet types can sign a swap, and how.
pub trait WalletSupport {
    /// Get the signing step for a wallet type, or `None` if it cannot sign swaps.
    fn signing_step(&self, wallet: WalletId) -> Option<SigningStep>;

    /// Whether the wallet type can be used in the swap flow.
    fn supports(&self, wallet: WalletId) -> bool {
        self.signing_step(wallet).is_some()
    }
}

/// Table of wallet types supported by the swap flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRegistry {
    steps: HashMap<WalletId, SigningStep>,
}

impl WalletRegistry {
    /// Create an empty registry that supports no wallets.
    pub fn empty() -> Self {
        Self { steps: HashMap::new() }
    }

    /// Default signing step for a wallet type, if it has one.
    pub fn default_step(wallet: WalletId) -> Option<SigningStep> {
        match wallet {
            WalletId::Web3 | WalletId::Metamask => Some(SigningStep::Web3),
            WalletId::LedgerNanoS | WalletId::Trezor => Some(SigningStep::Hardware),
            WalletId::Walletconnect => Some(SigningStep::WalletConnect),
            WalletId::KeystoreFile
            | WalletId::PrivateKey
            | WalletId::MnemonicPhrase
            | WalletId::ViewOnly => None,
        }
    }

    /// Register a signing step for a wallet type, replacing any previous one.
    pub fn with_step(mut self, wallet: WalletId, step: SigningStep) -> Self {
        self.steps.insert(wallet, step);
        self
    }

    /// Number of supported wallet types.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for WalletRegistry {
    fn default() -> Self {
        WalletId::ALL
            .iter()
            .filter_map(|&wallet| Self::default_step(wallet).map(|step| (wallet, step)))
            .fold(Self::empty(), |registry, (wallet, step)| registry.with_step(wallet, step))
    }
}

impl WalletSupport for WalletRegistry {
    fn signing_step(&self, wallet: WalletId) -> Option<SigningStep> {
        self.steps.get(&wallet).copied()
    }
}

impl WalletSupport for HashMap<WalletId, SigningStep> {
    fn signing_step(&self, wallet: WalletId) -> Option<SigningStep> {
        self.get(&wallet).copied()
    }
}
