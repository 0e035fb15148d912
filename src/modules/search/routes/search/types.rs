pub mod request {
    pub use crate::modules::search::repository::SearchFilters as Filters;
    use validator::Validate;

    #[derive(Validate)]
    pub struct Payload {
        #[validate(length(min = 1, max = 200, message = "Search query must not be empty"))]
        pub q: String,
    }
}

pub mod response {
    use crate::{
        modules::{menu::repository::MenuItem, restaurant::repository::Restaurant},
        utils,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;
    use validator::ValidationErrors;

    #[derive(Serialize)]
    pub struct SearchResult {
        pub restaurants: Vec<Restaurant>,
        pub menu_items: Vec<MenuItem>,
    }

    pub enum Success {
        Result(SearchResult),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Result(res) => (StatusCode::OK, Json(json!(res))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        SearchFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => utils::validation::into_response(errors),
                Self::SearchFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Search failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
