pub mod request {
    use crate::utils::validation::{validate_not_blank, validate_price};
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
        pub name: String,
        pub description: Option<String>,
        #[validate(custom(function = "validate_price"))]
        pub price: BigDecimal,
        pub is_available: Option<bool>,
    }

    pub struct Payload {
        pub restaurant_id: i64,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::menu::repository::MenuItem, utils};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MenuItemCreated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemCreated(menu_item) => {
                    (StatusCode::CREATED, Json(json!(menu_item))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        FailedToCreateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => utils::validation::into_response(errors),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::FailedToCreateMenuItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create menu item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
