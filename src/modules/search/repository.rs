use crate::modules::{menu::repository::MenuItem, restaurant::repository::Restaurant};
use serde::Deserialize;
use sqlx::PgExecutor;

const MAX_RESTAURANTS: i64 = 20;
const MAX_MENU_ITEMS: i64 = 50;

#[derive(Deserialize)]
pub struct SearchFilters {
    pub q: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Turns free text into an `ILIKE` substring pattern. LIKE wildcards in the
/// input are escaped so they match literally.
pub fn substring_pattern(q: &str) -> String {
    let mut pattern = String::with_capacity(q.len() + 2);
    pattern.push('%');
    for c in q.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn find_many_restaurants<'e, E: PgExecutor<'e>>(
    e: E,
    pattern: &str,
) -> Result<Vec<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        r#"
        SELECT id, name, address, cuisine, rating
        FROM restaurants
        WHERE
            name ILIKE $1 ESCAPE '\'
            OR COALESCE(cuisine, '') ILIKE $1 ESCAPE '\'
        ORDER BY id
        LIMIT $2
        "#,
    )
    .bind(pattern)
    .bind(MAX_RESTAURANTS)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to search restaurants: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_menu_items<'e, E: PgExecutor<'e>>(
    e: E,
    pattern: &str,
) -> Result<Vec<MenuItem>, Error> {
    sqlx::query_as::<_, MenuItem>(
        r#"
        SELECT id, restaurant_id, name, description, price, is_available
        FROM menu_items
        WHERE
            name ILIKE $1 ESCAPE '\'
            OR COALESCE(description, '') ILIKE $1 ESCAPE '\'
        ORDER BY id
        LIMIT $2
        "#,
    )
    .bind(pattern)
    .bind(MAX_MENU_ITEMS)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to search menu items: {}", err);
        Error::UnexpectedError
    })
}
