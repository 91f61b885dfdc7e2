//! Product catalogue for the inventory service
//!
//! This crate owns the single `Product` entity and everything needed to
//! serve it over HTTP.
//!
//! # Features
//!
//! - Product record and writable input shape
//! - Storage trait with in-memory and PostgreSQL backends
//! - Axum routes for list, get, create, update and delete
//!
//! # Feature Flags
//!
//! - `postgres` - Enable PostgreSQL storage
//! - `api` - Enable HTTP API

pub mod types;
pub mod error;
pub mod store;

#[cfg(feature = "api")]
pub mod api;

// Re-export commonly used types
pub use types::{Product, ProductInput};
pub use error::{ProductError, ProductResult};

// Store exports
pub use store::traits::ProductStore;
pub use store::memory::InMemoryProductStore;

#[cfg(feature = "postgres")]
pub use store::postgres::{PostgresProductStore, PoolSettings};

#[cfg(feature = "api")]
pub use api::{product_routes, ApiState};
