use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "checked_out")]
    CheckedOut,
}

impl CartStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartStatus::Open => "open",
            CartStatus::CheckedOut => "checked_out",
        }
    }

    pub fn is_open(&self) -> bool {
        *self == CartStatus::Open
    }

    /// A cart only ever moves from open to checked out.
    pub fn can_transition_to(&self, next: CartStatus) -> bool {
        matches!((self, next), (CartStatus::Open, CartStatus::CheckedOut))
    }
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct InvalidCartStatus(pub String);

impl fmt::Display for InvalidCartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid cart status: {}", self.0)
    }
}

impl std::error::Error for InvalidCartStatus {}

impl TryFrom<String> for CartStatus {
    type Error = InvalidCartStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_ref() {
            "open" => Ok(CartStatus::Open),
            "checked_out" => Ok(CartStatus::CheckedOut),
            _ => Err(InvalidCartStatus(value)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Cart {
    pub id: i64,
    pub user_id: Option<i64>,
    #[sqlx(try_from = "String")]
    pub status: CartStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct CartItem {
    pub id: i64,
    pub menu_item_id: i64,
    pub qty: i32,
    pub price_at_add: BigDecimal,
}

#[derive(Serialize, Clone, Debug)]
pub struct FullCart {
    pub id: i64,
    pub user_id: Option<i64>,
    pub status: CartStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total: BigDecimal,
}

impl FullCart {
    pub fn new(cart: Cart, items: Vec<CartItem>) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
            status: cart.status,
            created_at: cart.created_at,
            total: total(&items),
            items,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FullCartRow {
    id: i64,
    user_id: Option<i64>,
    #[sqlx(try_from = "String")]
    status: CartStatus,
    created_at: DateTime<Utc>,
    items: Json<Vec<CartItem>>,
}

impl From<FullCartRow> for FullCart {
    fn from(row: FullCartRow) -> Self {
        FullCart::new(
            Cart {
                id: row.id,
                user_id: row.user_id,
                status: row.status,
                created_at: row.created_at,
            },
            row.items.0,
        )
    }
}

/// Exact sum of `qty * price_at_add` over every line.
pub fn total(items: &[CartItem]) -> BigDecimal {
    items.iter().fold(BigDecimal::from(0), |acc, item| {
        acc + BigDecimal::from(item.qty) * item.price_at_add.clone()
    })
}

/// Upper bound for the quantity of a single cart line.
pub const MAX_LINE_QTY: i32 = 10_000;

pub struct CreateCartPayload {
    pub user_id: Option<i64>,
}

#[derive(Debug)]
pub enum Error {
    QuantityLimitExceeded,
    UnexpectedError,
}

pub async fn create<'e, E>(e: E, payload: CreateCartPayload) -> Result<Cart, Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Cart>(
        "
        INSERT INTO carts (user_id, status)
        VALUES ($1, $2)
        RETURNING id, user_id, status, created_at
        ",
    )
    .bind(payload.user_id)
    .bind(CartStatus::Open.as_str())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a cart: {}", err);
        Error::UnexpectedError
    })
}

/// Locks the cart row until the surrounding transaction ends, so concurrent
/// mutations and checkouts of one cart run one after the other.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Cart>, Error> {
    sqlx::query_as::<_, Cart>(
        "SELECT id, user_id, status, created_at FROM carts WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to lock cart by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_full_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<FullCart>, Error> {
    sqlx::query_as::<_, FullCartRow>(
        "
        SELECT
            carts.id,
            carts.user_id,
            carts.status,
            carts.created_at,
            COALESCE(
                JSONB_AGG(
                    JSONB_BUILD_OBJECT(
                        'id', cart_items.id,
                        'menu_item_id', cart_items.menu_item_id,
                        'qty', cart_items.qty,
                        'price_at_add', cart_items.price_at_add::TEXT
                    )
                    ORDER BY cart_items.id
                ) FILTER (WHERE cart_items.id IS NOT NULL),
                '[]'::JSONB
            ) AS items
        FROM
            carts
        LEFT JOIN cart_items ON cart_items.cart_id = carts.id
        WHERE
            carts.id = $1
        GROUP BY
            carts.id
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map(|row| row.map(FullCart::from))
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch full cart by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// Moves the cart from `from` to `to`. Returns false when the cart was not in
/// `from` anymore.
pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    from: CartStatus,
    to: CartStatus,
) -> Result<bool, Error> {
    sqlx::query("UPDATE carts SET status = $1 WHERE id = $2 AND status = $3")
        .bind(to.as_str())
        .bind(id)
        .bind(from.as_str())
        .execute(e)
        .await
        .map(|res| res.rows_affected() == 1)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update status of cart {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_items_by_cart_id<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: i64,
) -> Result<Vec<CartItem>, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        SELECT id, menu_item_id, qty, price_at_add
        FROM cart_items
        WHERE cart_id = $1
        ORDER BY id
        ",
    )
    .bind(cart_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch items of cart {}: {}",
            cart_id,
            err
        );
        Error::UnexpectedError
    })
}

pub struct AddCartItemPayload {
    pub cart_id: i64,
    pub menu_item_id: i64,
    pub qty: i32,
    pub price_at_add: BigDecimal,
}

/// Inserts a new line, or bumps the quantity of the existing line for the same
/// menu item. An existing line keeps the `price_at_add` it was created with.
/// Fails with `QuantityLimitExceeded` when the merged quantity would go past
/// `MAX_LINE_QTY`; the line is left untouched in that case.
pub async fn add_item<'e, E: PgExecutor<'e>>(
    e: E,
    payload: AddCartItemPayload,
) -> Result<CartItem, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        INSERT INTO cart_items (cart_id, menu_item_id, qty, price_at_add)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (cart_id, menu_item_id)
        DO UPDATE SET qty = cart_items.qty + EXCLUDED.qty
        WHERE cart_items.qty::BIGINT + EXCLUDED.qty::BIGINT <= $5
        RETURNING id, menu_item_id, qty, price_at_add
        ",
    )
    .bind(payload.cart_id)
    .bind(payload.menu_item_id)
    .bind(payload.qty)
    .bind(payload.price_at_add)
    .bind(MAX_LINE_QTY as i64)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to add menu item {} to cart {}: {}",
            payload.menu_item_id,
            payload.cart_id,
            err
        );
        Error::UnexpectedError
    })?
    .ok_or(Error::QuantityLimitExceeded)
}

pub async fn update_item_qty<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: i64,
    menu_item_id: i64,
    qty: i32,
) -> Result<Option<CartItem>, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        UPDATE cart_items SET
            qty = $1
        WHERE
            cart_id = $2
            AND menu_item_id = $3
        RETURNING id, menu_item_id, qty, price_at_add
        ",
    )
    .bind(qty)
    .bind(cart_id)
    .bind(menu_item_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update menu item {} in cart {}: {}",
            menu_item_id,
            cart_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn remove_item<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: i64,
    menu_item_id: i64,
) -> Result<bool, Error> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND menu_item_id = $2")
        .bind(cart_id)
        .bind(menu_item_id)
        .execute(e)
        .await
        .map(|res| res.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to remove menu item {} from cart {}: {}",
                menu_item_id,
                cart_id,
                err
            );
            Error::UnexpectedError
        })
}
