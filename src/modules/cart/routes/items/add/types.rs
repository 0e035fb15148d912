pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        pub menu_item_id: i64,
        #[validate(range(min = 1, max = 10000, message = "Quantity must be between 1 and 10000"))]
        pub qty: i32,
    }

    pub struct Payload {
        pub cart_id: i64,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::cart::repository::FullCart, utils};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ItemAdded(FullCart),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemAdded(cart) => (StatusCode::OK, Json(json!(cart))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        OpenCartNotFound,
        MenuItemNotAvailable,
        QuantityLimitExceeded,
        FailedToAddItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => utils::validation::into_response(errors),
                Self::OpenCartNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Open cart not found" })),
                )
                    .into_response(),
                Self::MenuItemNotAvailable => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Menu item not available" })),
                )
                    .into_response(),
                Self::QuantityLimitExceeded => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Quantity exceeds the limit for a cart line" })),
                )
                    .into_response(),
                Self::FailedToAddItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add item to cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
