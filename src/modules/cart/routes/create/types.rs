pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    pub struct Body {
        pub user_id: Option<i64>,
    }
}

pub mod response {
    use crate::modules::cart::repository::FullCart;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CartCreated(FullCart),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartCreated(cart) => (StatusCode::CREATED, Json(json!(cart))).into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        FailedToCreateCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToCreateCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
