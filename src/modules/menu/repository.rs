use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub is_available: bool,
}

pub struct CreateMenuItemPayload {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub is_available: bool,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMenuItemPayload,
) -> Result<MenuItem, Error> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (
            restaurant_id,
            name,
            description,
            price,
            is_available
        )
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, restaurant_id, name, description, price, is_available
        ",
    )
    .bind(payload.restaurant_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.is_available)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a menu item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>(
        "
        SELECT id, restaurant_id, name, description, price, is_available
        FROM menu_items
        WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch a menu item by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: i64,
) -> Result<Vec<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>(
        "
        SELECT id, restaurant_id, name, description, price, is_available
        FROM menu_items
        WHERE restaurant_id = $1
        ORDER BY id
        ",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menu of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub struct UpdateMenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub is_available: Option<bool>,
}

/// Only touches the menu item row. Cart lines keep their own price snapshot.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: i64,
    id: i64,
    payload: UpdateMenuItemPayload,
) -> Result<Option<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            price = COALESCE($3, price),
            is_available = COALESCE($4, is_available)
        WHERE
            id = $5
            AND restaurant_id = $6
        RETURNING id, restaurant_id, name, description, price, is_available
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.is_available)
    .bind(id)
    .bind(restaurant_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update menu item by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}
