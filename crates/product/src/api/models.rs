//! API models for product HTTP endpoints

use serde::{Deserialize, Serialize};

/// Confirmation message returned by a delete.
pub const DELETE_CONFIRMATION: &str = "successful deletion";

/// Error envelope: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Delete confirmation: `{"result": "successful deletion"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub result: String,
}

impl DeleteResponse {
    pub fn confirmed() -> Self {
        Self {
            result: DELETE_CONFIRMATION.to_string(),
        }
    }
}
