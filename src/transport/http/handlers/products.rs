use crate::domain::Product;
use crate::storage::StoreError;
use crate::transport::http::error::HttpError;
use crate::transport::http::types::{
    AppState, ErrorResponse, MessageResponse, NotFoundPayload, ProductMessageResponse,
    PRODUCT_CREATED, PRODUCT_DELETED, PRODUCT_UPDATED,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;
use tracing::info;

fn product_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, HttpError> {
    path.map(|Path(id)| id)
        .map_err(|e| HttpError::Unprocessable(format!("Invalid product id: {}", e)))
}

fn product_body(body: Result<Json<JsonValue>, JsonRejection>) -> Result<Product, HttpError> {
    let Json(payload) =
        body.map_err(|e| HttpError::Unprocessable(format!("Invalid JSON body: {}", e)))?;
    Ok(Product::from_json(&payload)?)
}

#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "Every stored product", body = [Product]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, HttpError> {
    Ok(Json(state.store.list_all().await?))
}

/// A missing id is reported as `200 {"error": "Product not found"}`, unlike update
/// and delete which answer `404`.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product, or a not-found payload", body = Product),
        (status = 422, description = "Unprocessable entity (invalid id)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, HttpError> {
    let id = product_id(path)?;
    match state.store.get_by_id(id).await {
        Ok(product) => Ok(Json(product).into_response()),
        Err(StoreError::NotFound(_)) => {
            Ok((StatusCode::OK, Json(NotFoundPayload::default())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    post,
    path = "/products/",
    request_body = Product,
    responses(
        (status = 200, description = "Product created", body = ProductMessageResponse),
        (status = 409, description = "A product with this id already exists", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid product)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<ProductMessageResponse>, HttpError> {
    let product = product_body(body)?;
    state.store.create(&product).await?;
    info!(id = product.id, "product created");
    Ok(Json(ProductMessageResponse {
        message: PRODUCT_CREATED.to_string(),
        product,
    }))
}

/// Overwrites every field except the id, which always comes from the path.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = ProductMessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid product)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<ProductMessageResponse>, HttpError> {
    let id = product_id(path)?;
    let product = product_body(body)?;
    let updated = state.store.update(id, &product).await?;
    info!(id, "product updated");
    Ok(Json(ProductMessageResponse {
        message: PRODUCT_UPDATED.to_string(),
        product: updated,
    }))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid id)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let id = product_id(path)?;
    state.store.delete(id).await?;
    info!(id, "product deleted");
    Ok(Json(MessageResponse {
        message: PRODUCT_DELETED.to_string(),
    }))
}
