mod checkout;
mod create;
mod get;
mod items;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(get::get_router())
        .merge(items::get_router())
        .merge(checkout::get_router())
}
