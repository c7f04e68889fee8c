//! Swap Transaction Core
//!
//! Helpers for turning a swap provider's unsigned transaction into the records
//! a wallet's signing layer consumes, and for narrowing the accounts and
//! assets a user can pick in a swap form.
//!
//! # Architecture Overview
//!
//! - **`swap`**: Transaction configuration, wire encoding and swap-form filters
//! - **`models`**: Asset, network, account and raw transaction records
//! - **`wallet`**: Wallet types and their swap signing capability
//! - **`builders`**: Builder patterns for incremental record construction
//! - **`config`**: Environment-based wallet support configuration
//! - **`errors`**: Error handling and reporting
//! - **`utils`**: Hex, decimal and address conversions
//!
//! # Core Concepts
//!
//! - **Base Asset**: A network's native currency. It pays for gas and is the
//!   fallback when a swap asset's ticker is unknown to the catalog
//! - **Smallest Unit**: Balances and amounts on the wire are integers in the
//!   asset's smallest unit (wei for ether), scaled by the asset's decimals
//! - **Chain Id**: Network identifier bound into every transaction to prevent
//!   replay on another network
//!
//! # Thread Safety
//!
//! All operations are pure functions over borrowed values and may be called
//! concurrently without coordination.

pub mod builders;
pub mod config;
pub mod errors;
pub mod models;
pub mod swap;
pub mod utils;
pub mod wallet;

// Re-export the main Result type and error enum for convenience
pub use errors::{Result, SwapError};

pub use builders::SwapTxConfigBuilder;
pub use swap::{
    build_transaction_config, build_wire_transaction, filter_accounts_by_swap_eligibility,
    filter_unselected_assets, AssetSource, TransactionConfig, WireTransaction,
};

// Module-specific result types for better ergonomics
pub type AssetResult<T> = std::result::Result<T, errors::AssetError>;
pub type ConversionResult<T> = std::result::Result<T, errors::ConversionError>;
pub type ConfigResult<T> = std::result::Result<T, errors::ConfigError>;
