use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::suppliers::{CreateSupplierInput, UpdateSupplierInput},
    ListQuery,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 6, message = "Phone number is too short"))]
    pub phone: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Delivery frequency is required"))]
    pub delivery_frequency: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSupplierRequest {
    pub name: Option<String>,
    pub address: Option<String>,

    #[validate(length(min = 6, message = "Phone number is too short"))]
    pub phone: Option<String>,

    #[validate(email(message = "Email must be valid"))]
    pub email: Option<String>,

    pub category: Option<String>,
    pub delivery_frequency: Option<String>,
}

/// Create a new supplier
async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateSupplierInput {
        name: payload.name,
        address: payload.address,
        phone: payload.phone,
        email: payload.email,
        category: payload.category,
        delivery_frequency: payload.delivery_frequency,
    };

    let supplier = state
        .services
        .suppliers
        .create_supplier(input)
        .await
        .map_err(map_service_error)?;

    info!("Supplier created: {}", supplier.id);

    Ok(created_response(supplier))
}

/// Get a supplier by ID
async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier = state
        .services
        .suppliers
        .get_supplier(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(supplier))
}

/// Update a supplier
async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateSupplierInput {
        name: payload.name,
        address: payload.address,
        phone: payload.phone,
        email: payload.email,
        category: payload.category,
        delivery_frequency: payload.delivery_frequency,
    };

    let supplier = state
        .services
        .suppliers
        .update_supplier(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Supplier updated: {}", id);

    Ok(success_response(supplier))
}

/// Delete a supplier
async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .suppliers
        .delete_supplier(id)
        .await
        .map_err(map_service_error)?;

    info!("Supplier deleted: {}", id);

    Ok(no_content_response())
}

/// List suppliers
async fn list_suppliers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state
        .services
        .suppliers
        .list_suppliers(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(suppliers))
}

/// Get suppliers by category
async fn get_suppliers_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state
        .services
        .suppliers
        .get_suppliers_by_category(&category)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(suppliers))
}

/// Creates the router for supplier endpoints
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_supplier))
        .route("/", get(list_suppliers))
        .route("/category/:category", get(get_suppliers_by_category))
        .route("/:id", get(get_supplier))
        .route("/:id", put(update_supplier))
        .route("/:id", delete(delete_supplier))
}
