//! In-memory product store implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use crate::types::{Product, ProductInput};
use crate::store::traits::ProductStore;
use crate::error::{ProductError, ProductResult};

struct Table {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

/// In-memory product store for testing and development
///
/// IDs start at 1 and are never reused, like a serial column.
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    /// Create a new, empty in-memory product store
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let table = self.table.read();
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        let table = self.table.read();
        table.rows.get(&id).cloned().ok_or(ProductError::NotFound(id))
    }

    async fn create(&self, input: &ProductInput) -> ProductResult<Product> {
        let mut table = self.table.write();
        let id = table.next_id;
        table.next_id += 1;

        let product = Product::from_input(id, input);
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> ProductResult<Product> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Product::from_input(id, input);
                Ok(row.clone())
            }
            None => Err(ProductError::NotFound(id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let mut table = self.table.write();
        Ok(table.rows.remove(&id).is_some())
    }
}
