//! Numeric and address conversion errors

use thiserror::Error;

/// Errors that can occur when converting quantities and addresses
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid hex quantity '{input}'")]
    InvalidHexQuantity { input: String },

    #[error("Invalid non-negative integer '{input}'")]
    InvalidInteger { input: String },

    #[error("Invalid decimal amount '{input}'")]
    InvalidDecimalAmount { input: String },

    #[error("Failed to parse address from string '{input}': {source}")]
    AddressParsingFailed {
        input: String,
        #[source]
        source: alloy::primitives::AddressError,
    },
}
