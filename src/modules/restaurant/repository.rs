use crate::utils::pagination::Pagination;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<BigDecimal>,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub address: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<BigDecimal>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (name, address, cuisine, rating)
        VALUES ($1, $2, $3, COALESCE($4, 0.0))
        RETURNING id, name, address, cuisine, rating
        ",
    )
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.cuisine)
    .bind(payload.rating)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, cuisine, rating FROM restaurants WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Vec<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        SELECT id, name, address, cuisine, rating
        FROM restaurants
        ORDER BY id
        LIMIT $1
        OFFSET $2
        ",
    )
    .bind(pagination.clamped_limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many restaurants: {}", err);
        Error::UnexpectedError
    })
}

pub async fn exists<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool, Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM restaurants WHERE id = $1)")
        .bind(id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while checking whether restaurant {} exists: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
