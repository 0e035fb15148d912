use super::types::{request, response};
use crate::{
    modules::{cart::repository, menu},
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
        response::Error::FailedToAddItem
    })?;

    let cart = repository::find_by_id_for_update(&mut *tx, payload.cart_id)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?
        .filter(|cart| cart.status.is_open())
        .ok_or(response::Error::OpenCartNotFound)?;

    let menu_item = menu::repository::find_by_id(&mut *tx, payload.body.menu_item_id)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?
        .filter(|menu_item| menu_item.is_available)
        .ok_or(response::Error::MenuItemNotAvailable)?;

    repository::add_item(
        &mut *tx,
        repository::AddCartItemPayload {
            cart_id: cart.id,
            menu_item_id: menu_item.id,
            qty: payload.body.qty,
            price_at_add: menu_item.price,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::QuantityLimitExceeded => response::Error::QuantityLimitExceeded,
        repository::Error::UnexpectedError => response::Error::FailedToAddItem,
    })?;

    let cart = repository::find_full_by_id(&mut *tx, cart.id)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?
        .ok_or(response::Error::FailedToAddItem)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToAddItem
        })
        .map(|_| response::Success::ItemAdded(cart))
}
