use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    validate_non_negative, TOGO_PHONE_RE,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::sales::{CreateSaleInput, UpdateSaleInput},
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
pub struct CreateSaleRequest {
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,

    /// Togo number: +228 followed by 8 digits
    #[validate(regex(
        path = "TOGO_PHONE_RE",
        message = "Phone must be +228 followed by 8 digits"
    ))]
    pub client_phone: String,

    #[validate(email(message = "Email must be valid"))]
    pub client_email: String,

    #[validate(length(min = 1, message = "Product is required"))]
    pub product: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(custom = "validate_non_negative")]
    pub quantity: Decimal,

    #[validate(custom = "validate_non_negative")]
    pub unit_price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSaleRequest {
    pub client_name: Option<String>,

    #[validate(regex(
        path = "TOGO_PHONE_RE",
        message = "Phone must be +228 followed by 8 digits"
    ))]
    pub client_phone: Option<String>,

    #[validate(email(message = "Email must be valid"))]
    pub client_email: Option<String>,

    pub product: Option<String>,
    pub category: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub quantity: Option<Decimal>,

    #[validate(custom = "validate_non_negative")]
    pub unit_price: Option<Decimal>,
}

/// Record a sale. The total never comes from the client: it is derived
/// from quantity, unit price and the configured tax rate.
#[utoipa::path(
    post,
    path = "/api/v1/pompistes/ventes",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded with its derived total"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Wrong role")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn create_sale(
    State(state): State<AppState>,
    Json(payload): Json<CreateSaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateSaleInput {
        client_name: payload.client_name,
        client_phone: payload.client_phone,
        client_email: payload.client_email,
        product: payload.product,
        category: payload.category,
        quantity: payload.quantity,
        unit_price: payload.unit_price,
    };

    let sale = state
        .services
        .sales
        .create_sale(input)
        .await
        .map_err(map_service_error)?;

    info!("Sale recorded: {}", sale.id);

    Ok(created_response(sale))
}

/// Get a sale by ID
#[utoipa::path(
    get,
    path = "/api/v1/pompistes/ventes/{id}",
    params(("id" = Uuid, Path, description = "Sale id")),
    responses(
        (status = 200, description = "The sale"),
        (status = 404, description = "Unknown sale")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let sale = state
        .services
        .sales
        .get_sale(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(sale))
}

/// Update a sale
#[utoipa::path(
    put,
    path = "/api/v1/pompistes/ventes/{id}",
    params(("id" = Uuid, Path, description = "Sale id")),
    request_body = UpdateSaleRequest,
    responses(
        (status = 200, description = "Sale updated, total recomputed"),
        (status = 404, description = "Unknown sale")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateSaleInput {
        client_name: payload.client_name,
        client_phone: payload.client_phone,
        client_email: payload.client_email,
        product: payload.product,
        category: payload.category,
        quantity: payload.quantity,
        unit_price: payload.unit_price,
    };

    let sale = state
        .services
        .sales
        .update_sale(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Sale updated: {}", id);

    Ok(success_response(sale))
}

/// Delete a sale
#[utoipa::path(
    delete,
    path = "/api/v1/pompistes/ventes/{id}",
    params(("id" = Uuid, Path, description = "Sale id")),
    responses(
        (status = 204, description = "Sale deleted"),
        (status = 404, description = "Unknown sale")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .sales
        .delete_sale(id)
        .await
        .map_err(map_service_error)?;

    info!("Sale deleted: {}", id);

    Ok(no_content_response())
}

/// List sales
#[utoipa::path(
    get,
    path = "/api/v1/pompistes/ventes",
    params(ListQuery),
    responses((status = 200, description = "Sale collection")),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let sales = state
        .services
        .sales
        .list_sales(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(sales))
}

/// Creates the router for sale endpoints
pub fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_sale))
        .route("/", get(list_sales))
        .route("/:id", get(get_sale))
        .route("/:id", put(update_sale))
        .route("/:id", delete(delete_sale))
}
