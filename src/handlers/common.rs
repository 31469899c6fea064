use crate::errors::{ApiError, ServiceError};
use crate::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError};

/// Togo phone number with country code, as the dashboard forms enforce it
pub static TOGO_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+228\d{8}$").expect("valid phone regex"));

/// Standard success response wrapped in the shared envelope
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// Standard created response wrapped in the shared envelope
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data))).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input before any service work happens
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Numeric form fields must not be negative
pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_values_are_rejected() {
        assert!(validate_non_negative(&dec!(-1)).is_err());
        assert!(validate_non_negative(&dec!(-0.01)).is_err());
        assert!(validate_non_negative(&dec!(0)).is_ok());
        assert!(validate_non_negative(&dec!(42.5)).is_ok());
    }

    #[test]
    fn togo_phone_format() {
        assert!(TOGO_PHONE_RE.is_match("+22890123456"));
        assert!(!TOGO_PHONE_RE.is_match("+228901234")); // too short
        assert!(!TOGO_PHONE_RE.is_match("90123456")); // missing country code
        assert!(!TOGO_PHONE_RE.is_match("+33890123456")); // wrong country code
    }
}
