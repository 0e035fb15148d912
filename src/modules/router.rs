use super::{cart, menu, order, restaurant, search, user};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/users", user::get_router())
        .nest("/restaurants", restaurant::get_router())
        .nest("/restaurants/:restaurant_id/menu", menu::get_router())
        .nest("/search", search::get_router())
        .nest("/carts", cart::get_router())
        .nest("/orders", order::get_router())
}
