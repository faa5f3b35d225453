use crate::domain::Product;
use crate::storage::ProductStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_CREATED: &str = "Product created successfully";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Confirmation returned by create and update.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProductMessageResponse {
    pub message: String,
    pub product: Product,
}

/// Confirmation returned by delete.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a `200` get-by-id response when the id does not exist.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct NotFoundPayload {
    pub error: String,
}

impl Default for NotFoundPayload {
    fn default() -> Self {
        Self {
            error: PRODUCT_NOT_FOUND.to_string(),
        }
    }
}

/// Error body for every non-2xx response. `detail` is a string, or a list of
/// field errors for validation failures.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = Object)]
    pub detail: serde_json::Value,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
