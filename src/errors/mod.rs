//! Error handling for swap transaction construction.
//!
//! Errors are grouped by the concern that raises them:
//!
//! - **`AssetError`**: Catalog lookups that must succeed (the network base asset)
//! - **`ConversionError`**: Malformed numeric, hex or address input
//! - **`ConfigError`**: Invalid environment configuration or incomplete builders
//!
//! `SwapError` wraps all of them so callers can use `?` across module
//! boundaries and still match on the specific cause. Every failure in this
//! crate is a deterministic input-validation failure; nothing here is worth
//! retrying with the same input.

pub mod asset;
pub mod config;
pub mod conversion;

pub use asset::AssetError;
pub use config::ConfigError;
pub use conversion::ConversionError;

/// Main result type for the library
pub type Result<T> = std::result::Result<T, SwapError>;

/// Top-level error enum for the library.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// A required asset could not be found in the catalog.
    ///
    /// Raised when the account's network references a base asset that the
    /// catalog does not contain. This is a precondition violation on the
    /// caller's side.
    #[error("Asset lookup failed: {0}")]
    Asset(#[from] AssetError),

    /// A numeric, hex or address string could not be converted.
    #[error("Numeric conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// Configuration could not be loaded or a builder was incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization error when rendering wire objects.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
