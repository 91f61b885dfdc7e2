//! Product domain types

use serde::{Deserialize, Serialize};

/// Quantity written when a request leaves it out.
///
/// Mirrors the column default in `sql/products.sql`.
pub const DEFAULT_QUANTITY: i32 = 0;

/// A stored product.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    /// Build a product from an id and the writable fields.
    ///
    /// A missing quantity takes [`DEFAULT_QUANTITY`].
    pub fn from_input(id: i64, input: &ProductInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            quantity: input.quantity.unwrap_or(DEFAULT_QUANTITY),
            price: input.price,
        }
    }
}

/// The writable part of a product, as decoded from a request body.
///
/// Any `id` the client sends is dropped during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<i32>,
    pub price: f64,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, quantity: Option<i32>, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}
