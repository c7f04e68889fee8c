//! Asset catalog errors.

use uuid::Uuid;

/// Errors that can occur while resolving assets
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset {uuid} not found in catalog")]
    AssetNotFound { uuid: Uuid },
}
