//! HTTP API for products.
//!
//! ## Modules
//!
//! - `handlers` - One handler per route
//! - `routes` - Axum router wiring the five product routes
//! - `response` - JSON response and error envelope helpers
//! - `models` - Response payload types

pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;

pub use handlers::ApiState;
pub use routes::product_routes;
