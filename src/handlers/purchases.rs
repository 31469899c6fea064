use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    validate_non_negative,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::purchases::{CreatePurchaseInput, UpdatePurchaseInput},
    ListQuery,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePurchaseRequest {
    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Product is required"))]
    pub product: String,

    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,

    pub payment_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePurchaseRequest {
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub product: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub price: Option<Decimal>,

    pub payment_date: Option<NaiveDate>,
}

/// Create a new purchase
async fn create_purchase(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreatePurchaseInput {
        supplier: payload.supplier,
        category: payload.category,
        product: payload.product,
        price: payload.price,
        payment_date: payload.payment_date,
    };

    let purchase = state
        .services
        .purchases
        .create_purchase(input)
        .await
        .map_err(map_service_error)?;

    info!("Purchase created: {}", purchase.id);

    Ok(created_response(purchase))
}

/// Get a purchase by ID
async fn get_purchase(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let purchase = state
        .services
        .purchases
        .get_purchase(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(purchase))
}

/// Update a purchase
async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePurchaseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdatePurchaseInput {
        supplier: payload.supplier,
        category: payload.category,
        product: payload.product,
        price: payload.price,
        payment_date: payload.payment_date,
    };

    let purchase = state
        .services
        .purchases
        .update_purchase(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Purchase updated: {}", id);

    Ok(success_response(purchase))
}

/// Delete a purchase
async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .purchases
        .delete_purchase(id)
        .await
        .map_err(map_service_error)?;

    info!("Purchase deleted: {}", id);

    Ok(no_content_response())
}

/// List purchases
async fn list_purchases(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let purchases = state
        .services
        .purchases
        .list_purchases(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(purchases))
}

/// Creates the router for purchase endpoints
pub fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_purchase))
        .route("/", get(list_purchases))
        .route("/:id", get(get_purchase))
        .route("/:id", put(update_purchase))
        .route("/:id", delete(delete_purchase))
}
