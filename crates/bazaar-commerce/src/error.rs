//! Commerce error types.
//!
//! Only the load seams fail: building the catalog, parsing locale codes,
//! reading configuration. Shopper mutations are total and never return
//! these errors.

use thiserror::Error;

/// Errors that can occur while loading storefront data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product record breaks a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Two categories share an id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Locale code outside the supported set.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Sort key outside the supported set.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(#[from] bazaar_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
