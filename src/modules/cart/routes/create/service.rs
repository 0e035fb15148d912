use super::types::{request, response};
use crate::{
    modules::{
        cart::repository::{self, FullCart},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Body) -> response::Response {
    if let Some(user_id) = payload.user_id {
        user::repository::find_by_id(&ctx.db_conn.pool, user_id)
            .await
            .map_err(|_| response::Error::FailedToCreateCart)?
            .ok_or(response::Error::UserNotFound)?;
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateCartPayload {
            user_id: payload.user_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateCart)
    .map(|cart| response::Success::CartCreated(FullCart::new(cart, vec![])))
}
