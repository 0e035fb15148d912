use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bigdecimal::BigDecimal;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

const MAX_PRICE: i64 = 100_000_000;

pub fn into_response(errors: ValidationErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response()
}

/// Prices are stored as `NUMERIC(10, 2)`: positive, at most two decimal
/// places and below 100000000.
pub fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    if *price <= BigDecimal::from(0) {
        return Err(ValidationError::new("INVALID_PRICE")
            .with_message(Cow::from("Price must be greater than 0")));
    }

    if *price >= BigDecimal::from(MAX_PRICE) {
        return Err(ValidationError::new("INVALID_PRICE")
            .with_message(Cow::from("Price must be less than 100000000")));
    }

    match price.with_scale(2) == *price {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_PRICE")
            .with_message(Cow::from("Price must have at most 2 decimal places"))),
    }
}

pub fn validate_rating(rating: &BigDecimal) -> Result<(), ValidationError> {
    match *rating >= BigDecimal::from(0) && *rating <= BigDecimal::from(5) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_RATING")
            .with_message(Cow::from("Rating must be between 0 and 5"))),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        false => Ok(()),
        true => Err(ValidationError::new("BLANK").with_message(Cow::from("Must not be blank"))),
    }
}
