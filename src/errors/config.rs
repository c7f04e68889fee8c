//! Configuration and builder errors.

/// Errors that can occur while loading configuration or building records
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Unknown wallet id: {id}")]
    UnknownWalletId { id: String },

    #[error("Missing builder input: {field}")]
    MissingField { field: &'static str },
}
