use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPayload {
            name: payload.name,
            address: payload.address,
            cuisine: payload.cuisine,
            rating: payload.rating,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)
    .map(response::Success::RestaurantCreated)
}
