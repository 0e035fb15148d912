use super::types::{request, response};
use crate::{modules::search::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate search query: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let pattern = repository::substring_pattern(&payload.q);

    let restaurants = repository::find_many_restaurants(&ctx.db_conn.pool, &pattern)
        .await
        .map_err(|_| response::Error::SearchFailed)?;

    let menu_items = repository::find_many_menu_items(&ctx.db_conn.pool, &pattern)
        .await
        .map_err(|_| response::Error::SearchFailed)?;

    Ok(response::Success::Result(response::SearchResult {
        restaurants,
        menu_items,
    }))
}
