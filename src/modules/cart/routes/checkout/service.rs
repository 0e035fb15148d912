use super::types::response;
use crate::{
    modules::{
        cart::repository::{self, CartStatus},
        order,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, cart_id: i64) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCheckout
    })?;

    let cart = repository::find_by_id_for_update(&mut *tx, cart_id)
        .await
        .map_err(|_| response::Error::FailedToCheckout)?
        .ok_or(response::Error::CartNotFound)?;

    if !cart.status.can_transition_to(CartStatus::CheckedOut) {
        return Err(response::Error::CartAlreadyCheckedOut);
    }

    let items = repository::find_items_by_cart_id(&mut *tx, cart.id)
        .await
        .map_err(|_| response::Error::FailedToCheckout)?;

    if items.is_empty() {
        return Err(response::Error::CartEmpty);
    }

    let order = order::repository::create(
        &mut *tx,
        order::repository::CreateOrderPayload {
            cart_id: cart.id,
            total_amount: repository::total(&items),
        },
    )
    .await
    .map_err(|err| match err {
        order::repository::Error::OrderAlreadyExists => response::Error::CartAlreadyCheckedOut,
        order::repository::Error::UnexpectedError => response::Error::FailedToCheckout,
    })?;

    let transitioned =
        repository::update_status(&mut *tx, cart.id, CartStatus::Open, CartStatus::CheckedOut)
            .await
            .map_err(|_| response::Error::FailedToCheckout)?;

    if !transitioned {
        return Err(response::Error::CartAlreadyCheckedOut);
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCheckout
    })?;

    tracing::info!(
        "Cart {} checked out as order {} ({})",
        cart.id,
        order.id,
        order.total_amount
    );

    Ok(response::Success::CheckedOut(order))
}
