use super::common::{created_response, map_service_error, success_response, validate_input};
use crate::{auth::AuthUser, errors::ApiError, handlers::AppState, ListQuery};
use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedbackRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Record a feedback message. The author role comes from the session
/// token, never from the body.
async fn create_feedback(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let feedback = state
        .services
        .feedback
        .create_feedback(user.role, payload.message)
        .await
        .map_err(map_service_error)?;

    info!("Feedback recorded: {}", feedback.id);

    Ok(created_response(feedback))
}

/// List feedback messages, newest first
async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let feedback = state
        .services
        .feedback
        .list_feedback(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(feedback))
}

/// Routes for posting feedback (attendant dashboard)
pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_feedback))
        .route("/", get(list_feedback))
}

/// Read-only routes for reviewing feedback (manager dashboard)
pub fn feedback_read_routes() -> Router<AppState> {
    Router::new().route("/", get(list_feedback))
}
