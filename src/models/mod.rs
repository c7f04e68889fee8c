//! Value records shared by the swap operations.
//!
//! All records are plain immutable values. Operations in this crate borrow
//! them and return freshly constructed results; nothing is mutated in place.
//!
//! - **`Asset`** / **`HeldAsset`** / **`SwapAsset`**: catalog entries, account
//!   balances and the lightweight asset references used by the swap form
//! - **`Network`**: chain id and base asset reference
//! - **`Account`**: address, network, wallet type and held balances
//! - **`RawTransaction`**: the unsigned transaction as supplied by the caller

pub mod account;
pub mod asset;
pub mod network;
pub mod transaction;

pub use account::Account;
pub use asset::{Asset, AssetLookup, HeldAsset, SwapAsset};
pub use network::Network;
pub use transaction::RawTransaction;
