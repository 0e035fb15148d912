pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(min = 1, max = 10000, message = "Quantity must be between 1 and 10000"))]
        pub qty: i32,
    }

    pub struct Payload {
        pub cart_id: i64,
        pub menu_item_id: i64,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::cart::repository::FullCart, utils};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ItemUpdated(FullCart),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemUpdated(cart) => (StatusCode::OK, Json(json!(cart))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CartNotFound,
        CartAlreadyCheckedOut,
        CartItemNotFound,
        FailedToUpdateItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => utils::validation::into_response(errors),
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
                Self::CartItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cart item not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update cart item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
