use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup failures against the catalog. Both variants are the same logical
/// kind (a key with no matching entry) and map to a 404 at the transport
/// boundary; no other error originates from this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Blood type '{label}' not found")]
    BloodTypeNotFound { label: String },

    #[error("Regional data for '{region}' not found")]
    RegionNotFound { region: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Client-facing error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl CatalogError {
    /// HTTP status the transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::BloodTypeNotFound { .. } | CatalogError::RegionNotFound { .. } => 404,
        }
    }

    /// Serializable error body naming the missing key.
    pub fn detail(&self) -> ErrorBody {
        ErrorBody {
            detail: self.to_string(),
        }
    }
}
