use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    extract_ip_from_headers, extract_user_agent,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CreateOption, CreateProduct, OptionItem, Product, ProductOption, ProductResponse,
    ProductStatus, Variant,
};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// OpenAPI tag for all catalog endpoints
pub const TAG: &str = "Products";

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, get_product),
    components(
        schemas(
            Product,
            ProductOption,
            OptionItem,
            Variant,
            ProductStatus,
            CreateProduct,
            CreateOption,
            ProductResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_product))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// Create a new product
///
/// A payload without options creates a simple product with exactly one
/// variant; a payload with options creates one variant per combination of
/// option items.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created with its generated variants", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(input).await?;

    // Audit log successful creation
    AuditEvent::new(
        None,
        "product.create",
        Some(format!("product:{}", product.product_id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({
        "product_name": product.product_name,
        "status": product.status.to_string(),
        "variant_count": product.variants.len(),
    }))
    .log();

    Ok((StatusCode::CREATED, Json(ProductResponse { product })))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<ProductResponse>> {
    let product = service.get_product(id).await?;
    Ok(Json(ProductResponse { product }))
}
