use super::types::response;
use crate::{
    modules::{menu::repository, restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, restaurant_id: i64) -> response::Response {
    let restaurant_exists = restaurant::repository::exists(&ctx.db_conn.pool, restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToFetchMenu)?;

    if !restaurant_exists {
        return Err(response::Error::RestaurantNotFound);
    }

    repository::find_many_by_restaurant_id(&ctx.db_conn.pool, restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToFetchMenu)
        .map(response::Success::Menu)
}
