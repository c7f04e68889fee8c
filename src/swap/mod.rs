//! Swap transaction construction and swap-form filters.
//!
//! This module turns the unsigned transaction returned by a swap provider into
//! the records the signing layer consumes, and filters the accounts and assets
//! offered by the swap form.
//!
//! # Pipeline
//!
//! 1. [`build_transaction_config`]: resolve the asset pair against the catalog,
//!    convert gas quantities to decimal strings and bind the raw transaction to
//!    the account's chain id
//! 2. [`build_wire_transaction`]: re-encode the amount and gas price as hex for
//!    signing and broadcast
//!
//! # Filters
//!
//! - [`filter_accounts_by_swap_eligibility`]: accounts whose wallet can sign and
//!   whose balance covers the requested amount
//! - [`filter_unselected_assets`]: assets not already chosen on either side of
//!   the swap
//!
//! Every operation is a pure function of its arguments. Filters return lazy
//! iterators that can be cloned to restart them.

pub mod filter;
pub mod transaction;
pub mod wire;

pub use filter::{filter_accounts_by_swap_eligibility, filter_unselected_assets};
pub use transaction::{build_transaction_config, AssetSource, TransactionConfig};
pub use wire::{build_wire_transaction, WireTransaction};
