use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::{
    entities::employee::Position,
    errors::ApiError,
    handlers::AppState,
    services::employees::{CreateEmployeeInput, UpdateEmployeeInput},
    ListQuery,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub birth_date: NaiveDate,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Marital status is required"))]
    pub marital_status: String,

    #[validate(length(min = 6, message = "Phone number is too short"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Bank account is required"))]
    pub bank_account: String,

    #[validate(length(min = 1, message = "Emergency contact is required"))]
    pub emergency_contact_name: String,

    #[validate(length(min = 6, message = "Emergency contact phone is too short"))]
    pub emergency_contact_phone: String,

    #[validate(length(min = 1, message = "Nationality is required"))]
    pub nationality: String,

    pub position: Position,

    #[validate(length(min = 1, message = "National ID is required"))]
    pub national_id: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Must repeat the password exactly
    #[validate(must_match = "password")]
    pub password_confirmation: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,

    #[validate(email(message = "Email must be valid"))]
    pub email: Option<String>,

    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<Position>,
    pub national_id: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// Create a new employee
async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateEmployeeInput {
        first_name: payload.first_name,
        last_name: payload.last_name,
        birth_date: payload.birth_date,
        email: payload.email,
        marital_status: payload.marital_status,
        phone: payload.phone,
        bank_account: payload.bank_account,
        emergency_contact_name: payload.emergency_contact_name,
        emergency_contact_phone: payload.emergency_contact_phone,
        nationality: payload.nationality,
        position: payload.position,
        national_id: payload.national_id,
        password: payload.password,
    };

    let employee = state
        .services
        .employees
        .create_employee(input)
        .await
        .map_err(map_service_error)?;

    info!("Employee created: {}", employee.id);

    Ok(created_response(employee))
}

/// Get an employee by ID
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state
        .services
        .employees
        .get_employee(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(employee))
}

/// Update an employee
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateEmployeeInput {
        first_name: payload.first_name,
        last_name: payload.last_name,
        birth_date: payload.birth_date,
        email: payload.email,
        marital_status: payload.marital_status,
        phone: payload.phone,
        bank_account: payload.bank_account,
        emergency_contact_name: payload.emergency_contact_name,
        emergency_contact_phone: payload.emergency_contact_phone,
        nationality: payload.nationality,
        position: payload.position,
        national_id: payload.national_id,
        password: payload.password,
    };

    let employee = state
        .services
        .employees
        .update_employee(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Employee updated: {}", id);

    Ok(success_response(employee))
}

/// Delete an employee
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .employees
        .delete_employee(id)
        .await
        .map_err(map_service_error)?;

    info!("Employee deleted: {}", id);

    Ok(no_content_response())
}

/// List employees
async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state
        .services
        .employees
        .list_employees(&query)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(employees))
}

/// Creates the router for employee endpoints
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee))
        .route("/", get(list_employees))
        .route("/:id", get(get_employee))
        .route("/:id", put(update_employee))
        .route("/:id", delete(delete_employee))
}
