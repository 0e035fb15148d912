use super::types::{request, response};
use crate::{modules::cart::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToRemoveItem
    })?;

    let cart = repository::find_by_id_for_update(&mut *tx, payload.cart_id)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?
        .ok_or(response::Error::CartNotFound)?;

    if !cart.status.is_open() {
        return Err(response::Error::CartAlreadyCheckedOut);
    }

    let removed = repository::remove_item(&mut *tx, cart.id, payload.menu_item_id)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?;

    if !removed {
        return Err(response::Error::CartItemNotFound);
    }

    let cart = repository::find_full_by_id(&mut *tx, cart.id)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?
        .ok_or(response::Error::FailedToRemoveItem)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToRemoveItem
        })
        .map(|_| response::Success::ItemRemoved(cart))
}
