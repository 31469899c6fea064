use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    validate_non_negative,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::restocks::{CreateRestockInput, UpdateRestockInput},
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
pub struct CreateRestockRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Product is required"))]
    pub product: String,

    #[validate(custom = "validate_non_negative")]
    pub stock_before: Decimal,

    #[validate(custom = "validate_non_negative")]
    pub stock_incoming: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_non_negative")]
    pub blend: Decimal,

    #[validate(length(min = 1, message = "Tank location is required"))]
    pub tank_location: String,

    #[validate(custom = "validate_non_negative")]
    pub amount_paid: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRestockRequest {
    pub date: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub product: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub stock_before: Option<Decimal>,

    #[validate(custom = "validate_non_negative")]
    pub stock_incoming: Option<Decimal>,

    #[validate(custom = "validate_non_negative")]
    pub blend: Option<Decimal>,

    pub tank_location: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub amount_paid: Option<Decimal>,
}

/// Create a restocking event. The submitted body carries no total: the
/// backend derives it.
async fn create_restock(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateRestockInput {
        date: payload.date,
        supplier: payload.supplier,
        category: payload.category,
        product: payload.product,
        stock_before: payload.stock_before,
        stock_incoming: payload.stock_incoming,
        blend: payload.blend,
        tank_location: payload.tank_location,
        amount_paid: payload.amount_paid,
    };

    let restock = state
        .services
        .restocks
        .create_restock(input)
        .await
        .map_err(map_service_error)?;

    info!("Restock created: {}", restock.id);

    Ok(created_response(restock))
}

/// Get a restocking event by ID
async fn get_restock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let restock = state
        .services
        .restocks
        .get_restock(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(restock))
}

/// Update a restocking event
async fn update_restock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRestockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateRestockInput {
        date: payload.date,
        supplier: payload.supplier,
        category: payload.category,
        product: payload.product,
        stock_before: payload.stock_before,
        stock_incoming: payload.stock_incoming,
        blend: payload.blend,
        tank_location: payload.tank_location,
        amount_paid: payload.amount_paid,
    };

    let restock = state
        .services
        .restocks
        .update_restock(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Restock updated: {}", id);

    Ok(success_response(restock))
}

/// Delete a restocking event
async fn delete_restock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .restocks
        .delete_restock(id)
        .await
        .map_err(map_service_error)?;

    info!("Restock deleted: {}", id);

    Ok(no_content_response())
}

/// List restocking events
async fn list_restocks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let restocks = state
        .services
        .restocks
        .list_restocks(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(restocks))
}

/// Creates the router for restock endpoints. Mounted under both the admin
/// and the manager scopes.
pub fn restock_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_restock))
        .route("/", get(list_restocks))
        .route("/:id", get(get_restock))
        .route("/:id", put(update_restock))
        .route("/:id", delete(delete_restock))
}
