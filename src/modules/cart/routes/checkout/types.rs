pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CheckedOut(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CheckedOut(order) => (StatusCode::CREATED, Json(json!(order))).into_response(),
            }
        }
    }

    pub enum Error {
        CartNotFound,
        CartAlreadyCheckedOut,
        CartEmpty,
        FailedToCheckout,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cart not found" })),
                )
                    .into_response(),
                Self::CartAlreadyCheckedOut => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Cart is already checked out" })),
                )
                    .into_response(),
                Self::CartEmpty => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Cart is empty" })),
                )
                    .into_response(),
                Self::FailedToCheckout => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to checkout cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
