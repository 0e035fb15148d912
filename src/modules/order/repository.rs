use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub cart_id: i64,
    pub placed_at: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

pub struct CreateOrderPayload {
    pub cart_id: i64,
    pub total_amount: BigDecimal,
}

#[derive(Debug)]
pub enum Error {
    OrderAlreadyExists,
    UnexpectedError,
}

/// One order per cart. A second insert for the same cart is rejected by the
/// unique index on `orders.cart_id`.
pub async fn create<'e, E>(e: E, payload: CreateOrderPayload) -> Result<Order>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (cart_id, total_amount)
        VALUES ($1, $2)
        RETURNING id, cart_id, placed_at, total_amount
        ",
    )
    .bind(payload.cart_id)
    .bind(payload.total_amount)
    .fetch_one(e)
    .await
    .map_err(|err| {
        let is_unique_violation = err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false);

        if is_unique_violation {
            tracing::warn!("Order already exists for cart {}", payload.cart_id);
            return Error::OrderAlreadyExists;
        }

        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "SELECT id, cart_id, placed_at, total_amount FROM orders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch order by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}
