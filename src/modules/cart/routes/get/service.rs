use super::types::response;
use crate::{modules::cart::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, cart_id: i64) -> response::Response {
    repository::find_full_by_id(&ctx.db_conn.pool, cart_id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?
        .ok_or(response::Error::CartNotFound)
        .map(response::Success::Cart)
}
