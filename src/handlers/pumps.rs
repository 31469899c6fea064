use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::pumps::{CreatePumpInput, UpdatePumpInput},
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
pub struct CreatePumpRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    /// Tank feeding the pump
    pub tank_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePumpRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub tank_id: Option<Uuid>,
}

/// Create a new pump
async fn create_pump(
    State(state): State<AppState>,
    Json(payload): Json<CreatePumpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreatePumpInput {
        name: payload.name,
        content: payload.content,
        tank_id: payload.tank_id,
    };

    let pump = state
        .services
        .pumps
        .create_pump(input)
        .await
        .map_err(map_service_error)?;

    info!("Pump created: {}", pump.id);

    Ok(created_response(pump))
}

/// Get a pump by ID
async fn get_pump(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let pump = state
        .services
        .pumps
        .get_pump(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(pump))
}

/// Update a pump
async fn update_pump(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePumpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdatePumpInput {
        name: payload.name,
        content: payload.content,
        tank_id: payload.tank_id,
    };

    let pump = state
        .services
        .pumps
        .update_pump(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Pump updated: {}", id);

    Ok(success_response(pump))
}

/// Delete a pump
async fn delete_pump(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .pumps
        .delete_pump(id)
        .await
        .map_err(map_service_error)?;

    info!("Pump deleted: {}", id);

    Ok(no_content_response())
}

/// List pumps
async fn list_pumps(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pumps = state
        .services
        .pumps
        .list_pumps(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(pumps))
}

/// Creates the router for pump endpoints
pub fn pump_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_pump))
        .route("/", get(list_pumps))
        .route("/:id", get(get_pump))
        .route("/:id", put(update_pump))
        .route("/:id", delete(delete_pump))
}
