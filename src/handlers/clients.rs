use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    TOGO_PHONE_RE,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::clients::{CreateClientInput, UpdateClientInput},
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
pub struct CreateClientRequest {
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    /// Togo number: +228 followed by 8 digits
    #[validate(regex(
        path = "TOGO_PHONE_RE",
        message = "Phone must be +228 followed by 8 digits"
    ))]
    pub phone: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    pub last_name: Option<String>,
    pub first_name: Option<String>,

    #[validate(regex(
        path = "TOGO_PHONE_RE",
        message = "Phone must be +228 followed by 8 digits"
    ))]
    pub phone: Option<String>,

    #[validate(email(message = "Email must be valid"))]
    pub email: Option<String>,
}

/// Create a new client. Duplicate phone numbers are rejected.
async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateClientInput {
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone: payload.phone,
        email: payload.email,
    };

    let client = state
        .services
        .clients
        .create_client(input)
        .await
        .map_err(map_service_error)?;

    info!("Client created: {}", client.id);

    Ok(created_response(client))
}

/// Get a client by ID
async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let client = state
        .services
        .clients
        .get_client(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(client))
}

/// Update a client
async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateClientInput {
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone: payload.phone,
        email: payload.email,
    };

    let client = state
        .services
        .clients
        .update_client(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Client updated: {}", id);

    Ok(success_response(client))
}

/// Delete a client
async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .clients
        .delete_client(id)
        .await
        .map_err(map_service_error)?;

    info!("Client deleted: {}", id);

    Ok(no_content_response())
}

/// List clients
async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let clients = state
        .services
        .clients
        .list_clients(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(clients))
}

/// Creates the router for client endpoints
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}
