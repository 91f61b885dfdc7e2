//! Response construction shared by every handler.
//!
//! Success payloads are serialized as-is; failures use the single-key
//! [`ErrorResponse`] envelope. `Json` sets `content-type: application/json`
//! in both cases.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use crate::api::models::ErrorResponse;
use crate::error::ProductError;

pub const INVALID_ID: &str = "invalid product ID";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const NOT_FOUND: &str = "Product not found";

/// A status code paired with a JSON body.
pub type ApiResponse<T> = (StatusCode, Json<T>);

/// A status code paired with the error envelope.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Serialize `payload` with the given status.
pub fn send_response<T: Serialize>(status: StatusCode, payload: T) -> ApiResponse<T> {
    (status, Json(payload))
}

/// Build an `{"error": message}` response with the given status.
pub fn send_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Translate a store failure: not-found is 404, anything else is 500
/// carrying the underlying error text.
pub fn store_error(e: ProductError) -> ApiError {
    match e {
        ProductError::NotFound(id) => {
            warn!(id, "Product not found");
            send_error(StatusCode::NOT_FOUND, NOT_FOUND)
        }
        ProductError::Storage(message) => {
            error!(error = %message, "Product store failure");
            send_error(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        other => {
            error!(error = %other, "Product store failure");
            send_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

/// Parse the `{id}` path segment.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        warn!(id = raw, "Rejected non-numeric product ID");
        send_error(StatusCode::BAD_REQUEST, INVALID_ID)
    })
}

/// Extract and parse the `{id}` path segment.
///
/// A segment axum cannot decode (e.g. invalid UTF-8) gets the same 400
/// envelope as a non-numeric one.
pub fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            warn!(error = %rejection, "Rejected undecodable product ID");
            Err(send_error(StatusCode::BAD_REQUEST, INVALID_ID))
        }
    }
}

/// Decode a JSON request body, ignoring the request's content type.
pub fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Rejected request payload");
        send_error(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("-3").unwrap(), -3);
        assert_eq!(parse_id("+5").unwrap(), 5);

        let (status, Json(body)) = parse_id("abc").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, INVALID_ID);

        assert!(parse_id("").is_err());
        assert!(parse_id("1.5").is_err());
    }

    #[test]
    fn test_store_error_mapping() {
        let (status, Json(body)) = store_error(ProductError::NotFound(9));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, NOT_FOUND);

        let (status, Json(body)) = store_error(ProductError::Storage("connection refused".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "connection refused");
    }
}
