//! Builder patterns for swap records.
//!
//! The swap form collects its inputs one at a time: the asset catalog is known
//! up front, the account and asset pair are picked by the user, and the raw
//! transaction arrives from the swap provider last. Builders let callers bind
//! what they have and produce the final record once everything is present.
//!
//! # Available Builders
//!
//! - **`SwapTxConfigBuilder`**: Binds an asset catalog once and builds
//!   [`TransactionConfig`](crate::swap::TransactionConfig)s from per-swap inputs
//!
//! Builders consume themselves on each setter and validate that every
//! required input was supplied before building.

pub mod tx_config;

pub use tx_config::SwapTxConfigBuilder;
