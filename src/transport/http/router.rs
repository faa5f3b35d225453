use crate::domain::{FieldError, Product};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, ErrorResponse, HealthResponse, MessageResponse, NotFoundPayload,
    ProductMessageResponse,
};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        FieldError,
        ProductMessageResponse,
        MessageResponse,
        NotFoundPayload,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let collection = get(products::list_products_handler).post(products::create_product_handler);
    let item = get(products::get_product_handler)
        .put(products::update_product_handler)
        .delete(products::delete_product_handler);

    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/products/", collection.clone())
        .route("/products", collection)
        .route("/products/:id", item)
        .with_state(app_state)
}

/// Cross-origin policy: the configured origins, any method, any request header,
/// credentials allowed.
///
/// Credentials rule out `*` wildcards, so methods and headers mirror the preflight.
pub fn build_cors(origins: &[String]) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|o| o.parse())
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Full application: API routes, Swagger UI, CORS and request tracing.
pub fn build_app(
    app_state: AppState,
    cors_origins: &[String],
) -> Result<Router, axum::http::header::InvalidHeaderValue> {
    let cors = build_cors(cors_origins)?;
    Ok(create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
