use super::common::{map_service_error, success_response};
use crate::{errors::ApiError, handlers::AppState};
use axum::{extract::State, response::IntoResponse, routing::get, Router};

/// Stock level per tank, for the stock chart
async fn stock_levels(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let levels = state
        .services
        .reports
        .stock_levels()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(levels))
}

/// Revenue per product plus grand totals, for the sales chart
async fn sales_summary(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .services
        .reports
        .sales_summary()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(summary))
}

/// Creates the router for dashboard report endpoints
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/stock-levels", get(stock_levels))
        .route("/sales-summary", get(sales_summary))
}
