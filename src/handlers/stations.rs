use super::common::{map_service_error, success_response, validate_input};
use crate::{errors::ApiError, handlers::AppState, services::stations::SaveStationInput};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveStationRequest {
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,

    #[validate(length(min = 1, message = "Activities are required"))]
    pub activities: String,

    #[validate(length(min = 1, message = "Fiscal ID is required"))]
    pub fiscal_id: String,

    #[validate(length(min = 1, message = "Bank account is required"))]
    pub bank_account: String,

    #[validate(length(min = 1, message = "Commune is required"))]
    pub commune: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Trade register is required"))]
    pub trade_register: String,
}

/// Get the station profile
async fn get_station(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let station = state
        .services
        .stations
        .get_station()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(station))
}

/// Create or replace the station profile
async fn save_station(
    State(state): State<AppState>,
    Json(payload): Json<SaveStationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = SaveStationInput {
        designation: payload.designation,
        activities: payload.activities,
        fiscal_id: payload.fiscal_id,
        bank_account: payload.bank_account,
        commune: payload.commune,
        email: payload.email,
        trade_register: payload.trade_register,
    };

    let station = state
        .services
        .stations
        .save_station(input)
        .await
        .map_err(map_service_error)?;

    info!("Station profile saved: {}", station.id);

    Ok(success_response(station))
}

/// Creates the router for the station profile
pub fn station_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_station))
        .route("/", post(save_station))
}
