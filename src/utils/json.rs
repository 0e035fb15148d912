use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// `axum::Json` with rejections rendered as 400 `{"error": ...}`.
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => {
                tracing::warn!("Failed to parse request body: {}", rejection.body_text());
                Err((
                    StatusCode::BAD_REQUEST,
                    axum::Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response())
            }
        }
    }
}
