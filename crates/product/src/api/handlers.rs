//! HTTP request handlers for the product API.
//!
//! Each handler parses its inputs, makes one store call and maps the
//! outcome through [`crate::api::response`].

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::models::DeleteResponse;
use crate::api::response::{
    parse_body, path_id, send_error, send_response, store_error, ApiResult, NOT_FOUND,
};
use crate::store::traits::ProductStore;
use crate::types::{Product, ProductInput};

/// Shared state for product API handlers.
pub struct ApiState {
    pub store: Arc<dyn ProductStore>,
    /// Answer 404 when deleting an id that does not exist
    pub strict_delete: bool,
}

impl ApiState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            strict_delete: false,
        }
    }

    pub fn with_strict_delete(mut self, strict_delete: bool) -> Self {
        self.strict_delete = strict_delete;
        self
    }
}

/// GET /products
pub async fn list_products(State(state): State<Arc<ApiState>>) -> ApiResult<Vec<Product>> {
    let products = state.store.list_all().await.map_err(store_error)?;
    debug!(count = products.len(), "Listed products");
    Ok(send_response(StatusCode::OK, products))
}

/// GET /product/{id}
pub async fn get_product(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Product> {
    let id = path_id(id)?;
    let product = state.store.get_by_id(id).await.map_err(store_error)?;
    Ok(send_response(StatusCode::OK, product))
}

/// POST /product
pub async fn create_product(State(state): State<Arc<ApiState>>, body: Bytes) -> ApiResult<Product> {
    let input: ProductInput = parse_body(&body)?;
    let product = state.store.create(&input).await.map_err(store_error)?;
    info!(id = product.id, name = %product.name, "Created product");
    Ok(send_response(StatusCode::CREATED, product))
}

/// PUT /product/{id}
pub async fn update_product(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Product> {
    let id = path_id(id)?;
    let input: ProductInput = parse_body(&body)?;
    let product = state.store.update(id, &input).await.map_err(store_error)?;
    info!(id, "Updated product");
    Ok(send_response(StatusCode::OK, product))
}

/// DELETE /product/{id}
pub async fn delete_product(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<DeleteResponse> {
    let id = path_id(id)?;
    let removed = state.store.delete_by_id(id).await.map_err(store_error)?;

    if !removed {
        if state.strict_delete {
            warn!(id, "Delete of missing product rejected");
            return Err(send_error(StatusCode::NOT_FOUND, NOT_FOUND));
        }
        debug!(id, "Delete matched no product");
    } else {
        info!(id, "Deleted product");
    }

    Ok(send_response(StatusCode::OK, DeleteResponse::confirmed()))
}
