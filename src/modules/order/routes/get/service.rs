use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, order_id: i64) -> response::Response {
    match repository::find_by_id(&ctx.db_conn.pool, order_id).await {
        Ok(Some(order)) => Ok(response::Success::Order(order)),
        Ok(None) => Err(response::Error::OrderNotFound),
        Err(_) => Err(response::Error::FailedToFetchOrder),
    }
}
