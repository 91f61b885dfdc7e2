//! Product error types

use thiserror::Error;

/// Errors that can occur while reading or writing products
#[derive(Error, Debug)]
pub enum ProductError {
    /// No row matched the requested id
    #[error("Product not found: {0}")]
    NotFound(i64),

    /// Any other storage engine failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Store could not be set up from its configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProductError {
    /// Whether this is the not-found condition rather than a data-access failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for ProductError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Result type for product operations
pub type ProductResult<T> = std::result::Result<T, ProductError>;
