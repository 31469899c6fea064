use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    validate_non_negative,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::products::{CreateProductInput, UpdateProductInput},
    ListQuery,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,

    #[validate(custom = "validate_non_negative")]
    pub pump_price: Decimal,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Wholesale unit is required"))]
    pub wholesale_unit: String,

    #[validate(length(min = 1, message = "Retail unit is required"))]
    pub retail_unit: String,

    #[validate(custom = "validate_non_negative")]
    pub capacity: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub designation: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub pump_price: Option<Decimal>,

    pub category: Option<String>,
    pub wholesale_unit: Option<String>,
    pub retail_unit: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub capacity: Option<Decimal>,
}

/// Create a new product
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateProductInput {
        designation: payload.designation,
        pump_price: payload.pump_price,
        category: payload.category,
        wholesale_unit: payload.wholesale_unit,
        retail_unit: payload.retail_unit,
        capacity: payload.capacity,
    };

    let product = state
        .services
        .products
        .create_product(input)
        .await
        .map_err(map_service_error)?;

    info!("Product created: {}", product.id);

    Ok(created_response(product))
}

/// Get a product by ID
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .get_product(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(product))
}

/// Update a product
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateProductInput {
        designation: payload.designation,
        pump_price: payload.pump_price,
        category: payload.category,
        wholesale_unit: payload.wholesale_unit,
        retail_unit: payload.retail_unit,
        capacity: payload.capacity,
    };

    let product = state
        .services
        .products
        .update_product(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Product updated: {}", id);

    Ok(success_response(product))
}

/// Delete a product
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete_product(id)
        .await
        .map_err(map_service_error)?;

    info!("Product deleted: {}", id);

    Ok(no_content_response())
}

/// List products
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .services
        .products
        .list_products(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(products))
}

/// List distinct product categories, for dependent form dropdowns
async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .services
        .products
        .list_categories()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(categories))
}

/// Creates the router for product endpoints
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/", get(list_products))
        .route("/categories", get(list_categories))
        .route("/:id", get(get_product))
        .route("/:id", put(update_product))
        .route("/:id", delete(delete_product))
}
