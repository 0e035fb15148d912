use super::types::{request, response};
use crate::{
    modules::{menu::repository, restaurant},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateMenuItem
    })?;

    let restaurant_exists = restaurant::repository::exists(&mut *tx, payload.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToCreateMenuItem)?;

    if !restaurant_exists {
        return Err(response::Error::RestaurantNotFound);
    }

    let menu_item = repository::create(
        &mut *tx,
        repository::CreateMenuItemPayload {
            restaurant_id: payload.restaurant_id,
            name: payload.body.name,
            description: payload.body.description,
            price: payload.body.price,
            is_available: payload.body.is_available.unwrap_or(true),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMenuItem)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToCreateMenuItem
        })
        .map(|_| response::Success::MenuItemCreated(menu_item))
}
