use super::{service::service, types::request};
use crate::{types::Context, utils::json::Json};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path((cart_id, menu_item_id)): Path<(i64, i64)>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            cart_id,
            menu_item_id,
            body,
        },
    )
    .await
}
