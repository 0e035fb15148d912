use super::types::{request, response};
use crate::{modules::cart::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateItem
    })?;

    let cart = repository::find_by_id_for_update(&mut *tx, payload.cart_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateItem)?
        .ok_or(response::Error::CartNotFound)?;

    if !cart.status.is_open() {
        return Err(response::Error::CartAlreadyCheckedOut);
    }

    repository::update_item_qty(
        &mut *tx,
        cart.id,
        payload.menu_item_id,
        payload.body.qty,
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateItem)?
    .ok_or(response::Error::CartItemNotFound)?;

    let cart = repository::find_full_by_id(&mut *tx, cart.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateItem)?
        .ok_or(response::Error::FailedToUpdateItem)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToUpdateItem
        })
        .map(|_| response::Success::ItemUpdated(cart))
}
