pub mod request {
    pub struct Payload {
        pub cart_id: i64,
        pub menu_item_id: i64,
    }
}

pub mod response {
    use crate::modules::cart::repository::FullCart;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ItemRemoved(FullCart),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemRemoved(cart) => (StatusCode::OK, Json(json!(cart))).into_response(),
            }
        }
    }

    pub enum Error {
        CartNotFound,
        CartAlreadyCheckedOut,
        CartItemNotFound,
        FailedToRemoveItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": "Cart not found"})),
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
                Self::FailedToRemoveItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to remove item from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
