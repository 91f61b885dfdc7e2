//! ProductStore trait definition

use async_trait::async_trait;
use crate::types::{Product, ProductInput};
use crate::error::ProductResult;

/// ProductStore trait - the data-access interface for products
///
/// Implementations are shared by every request handler, so they must be
/// safe to call concurrently.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List every product in the store's natural scan order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    ///
    /// # Returns
    /// The product, or `ProductError::NotFound` when no row matches
    async fn get_by_id(&self, id: i64) -> ProductResult<Product>;

    /// Insert a new product
    ///
    /// # Returns
    /// The stored product with its generated ID
    async fn create(&self, input: &ProductInput) -> ProductResult<Product>;

    /// Overwrite every mutable field of an existing product
    ///
    /// # Returns
    /// The product as written, or `ProductError::NotFound` when no row matches
    async fn update(&self, id: i64, input: &ProductInput) -> ProductResult<Product>;

    /// Delete a product by ID
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if the ID did not exist
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;
}
