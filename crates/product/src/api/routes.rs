//! Axum route definitions for the product API.

use crate::api::handlers::{self, ApiState};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Create all product routes.
///
/// # Routes
///
/// - `GET /products` - List all products
/// - `GET /product/{id}` - Get by ID
/// - `POST /product` - Create
/// - `PUT /product/{id}` - Replace every field
/// - `DELETE /product/{id}` - Delete
pub fn product_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/products", get(handlers::list_products))
        .route("/product", post(handlers::create_product))
        .route(
            "/product/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(state)
}
