use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.restaurant_id,
        payload.menu_item_id,
        repository::UpdateMenuItemPayload {
            name: payload.body.name,
            description: payload.body.description,
            price: payload.body.price,
            is_available: payload.body.is_available,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateMenuItem)?
    .ok_or(response::Error::MenuItemNotFound)
    .map(response::Success::MenuItemUpdated)
}
