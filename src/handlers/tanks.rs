use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    validate_non_negative,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::tanks::{CreateTankInput, UpdateTankInput},
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

// Request DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTankRequest {
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Stored product is required"))]
    pub stored_product: String,

    #[validate(custom = "validate_non_negative")]
    pub capacity: Decimal,

    #[validate(custom = "validate_non_negative")]
    pub purchase_price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTankRequest {
    pub designation: Option<String>,
    pub name: Option<String>,
    pub stored_product: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub capacity: Option<Decimal>,

    #[validate(custom = "validate_non_negative")]
    pub purchase_price: Option<Decimal>,
}

// Handler functions

/// Create a new tank
#[utoipa::path(
    post,
    path = "/api/v1/admin/cuves",
    request_body = CreateTankRequest,
    responses(
        (status = 201, description = "Tank created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Wrong role")
    ),
    security(("bearer_auth" = [])),
    tag = "Tanks"
)]
pub async fn create_tank(
    State(state): State<AppState>,
    Json(payload): Json<CreateTankRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateTankInput {
        designation: payload.designation,
        name: payload.name,
        stored_product: payload.stored_product,
        capacity: payload.capacity,
        purchase_price: payload.purchase_price,
    };

    let tank = state
        .services
        .tanks
        .create_tank(input)
        .await
        .map_err(map_service_error)?;

    info!("Tank created: {}", tank.id);

    Ok(created_response(tank))
}

/// Get a tank by ID
#[utoipa::path(
    get,
    path = "/api/v1/admin/cuves/{id}",
    params(("id" = Uuid, Path, description = "Tank id")),
    responses(
        (status = 200, description = "The tank"),
        (status = 404, description = "Unknown tank")
    ),
    security(("bearer_auth" = [])),
    tag = "Tanks"
)]
pub async fn get_tank(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let tank = state
        .services
        .tanks
        .get_tank(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(tank))
}

/// Update a tank
#[utoipa::path(
    put,
    path = "/api/v1/admin/cuves/{id}",
    params(("id" = Uuid, Path, description = "Tank id")),
    request_body = UpdateTankRequest,
    responses(
        (status = 200, description = "Tank updated"),
        (status = 404, description = "Unknown tank")
    ),
    security(("bearer_auth" = [])),
    tag = "Tanks"
)]
pub async fn update_tank(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTankRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateTankInput {
        designation: payload.designation,
        name: payload.name,
        stored_product: payload.stored_product,
        capacity: payload.capacity,
        purchase_price: payload.purchase_price,
    };

    let tank = state
        .services
        .tanks
        .update_tank(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Tank updated: {}", id);

    Ok(success_response(tank))
}

/// Delete a tank
#[utoipa::path(
    delete,
    path = "/api/v1/admin/cuves/{id}",
    params(("id" = Uuid, Path, description = "Tank id")),
    responses(
        (status = 204, description = "Tank deleted"),
        (status = 404, description = "Unknown tank")
    ),
    security(("bearer_auth" = [])),
    tag = "Tanks"
)]
pub async fn delete_tank(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .tanks
        .delete_tank(id)
        .await
        .map_err(map_service_error)?;

    info!("Tank deleted: {}", id);

    Ok(no_content_response())
}

/// List tanks with optional search and sorting
#[utoipa::path(
    get,
    path = "/api/v1/admin/cuves",
    params(ListQuery),
    responses((status = 200, description = "Tank collection")),
    security(("bearer_auth" = [])),
    tag = "Tanks"
)]
pub async fn list_tanks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let tanks = state
        .services
        .tanks
        .list_tanks(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(tanks))
}

/// Creates the router for tank endpoints
pub fn tank_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tank))
        .route("/", get(list_tanks))
        .route("/:id", get(get_tank))
        .route("/:id", put(update_tank))
        .route("/:id", delete(delete_tank))
}
