mod common;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use bigdecimal::BigDecimal;
use common::{app, empty_request, json_request, send};
use serde_json::{json, Value};
use sqlx::PgPool;
use std::str::FromStr;

fn decimal(value: &Value) -> BigDecimal {
    BigDecimal::from_str(value.as_str().unwrap()).unwrap()
}

async fn seed_menu(app: &Router, prices: &[&str]) -> (i64, Vec<i64>) {
    let (status, restaurant) = send(
        app,
        json_request(
            Method::POST,
            "/restaurants",
            json!({ "name": "Luigi's", "cuisine": "Italian" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let restaurant_id = restaurant["id"].as_i64().unwrap();

    let mut menu_item_ids = Vec::new();
    for (i, price) in prices.iter().enumerate() {
        let (status, menu_item) = send(
            app,
            json_request(
                Method::POST,
                &format!("/restaurants/{restaurant_id}/menu"),
                json!({ "name": format!("Dish {i}"), "price": price }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        menu_item_ids.push(menu_item["id"].as_i64().unwrap());
    }

    (restaurant_id, menu_item_ids)
}

async fn create_cart(app: &Router) -> i64 {
    let (status, cart) = send(app, json_request(Method::POST, "/carts", json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(cart["status"], "open");
    assert_eq!(cart["items"], json!([]));
    cart["id"].as_i64().unwrap()
}

async fn add_item(app: &Router, cart_id: i64, menu_item_id: i64, qty: i32) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            Method::POST,
            &format!("/carts/{cart_id}/items"),
            json!({ "menu_item_id": menu_item_id, "qty": qty }),
        ),
    )
    .await
}

async fn get_cart(app: &Router, cart_id: i64) -> Value {
    let (status, cart) = send(app, empty_request(Method::GET, &format!("/carts/{cart_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    cart
}

async fn order_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn cart_for_unknown_user_is_not_found(pool: PgPool) {
    let app = app(pool);

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/carts", json!({ "user_id": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn adding_the_same_item_twice_merges_the_line(pool: PgPool) {
    let app = app(pool);
    let (_, menu) = seed_menu(&app, &["4.50"]).await;
    let cart_id = create_cart(&app).await;

    let (status, _) = add_item(&app, cart_id, menu[0], 2).await;
    assert_eq!(status, StatusCode::OK);
    let (status, cart) = add_item(&app, cart_id, menu[0], 3).await;
    assert_eq!(status, StatusCode::OK);

    let items = cart["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["qty"], 5);
    assert_eq!(decimal(&cart["total"]), BigDecimal::from_str("22.50").unwrap());
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn unavailable_item_cannot_be_added(pool: PgPool) {
    let app = app(pool);
    let (restaurant_id, menu) = seed_menu(&app, &["7.00"]).await;
    let cart_id = create_cart(&app).await;

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/restaurants/{restaurant_id}/menu/{}", menu[0]),
            json!({ "is_available": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = add_item(&app, cart_id, menu[0], 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = add_item(&app, cart_id, 9999, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(get_cart(&app, cart_id).await["items"], json!([]));
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn price_at_add_survives_menu_price_changes(pool: PgPool) {
    let app = app(pool);
    let (restaurant_id, menu) = seed_menu(&app, &["10.00"]).await;
    let cart_id = create_cart(&app).await;

    add_item(&app, cart_id, menu[0], 1).await;

    let (status, menu_item) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/restaurants/{restaurant_id}/menu/{}", menu[0]),
            json!({ "price": "12.50" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&menu_item["price"]), BigDecimal::from_str("12.50").unwrap());

    let (_, cart) = add_item(&app, cart_id, menu[0], 1).await;
    let line = &cart["items"][0];
    assert_eq!(line["qty"], 2);
    assert_eq!(decimal(&line["price_at_add"]), BigDecimal::from_str("10.00").unwrap());
    assert_eq!(decimal(&cart["total"]), BigDecimal::from_str("20.00").unwrap());
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn update_and_remove_lines(pool: PgPool) {
    let app = app(pool);
    let (_, menu) = seed_menu(&app, &["3.00", "1.25"]).await;
    let cart_id = create_cart(&app).await;

    add_item(&app, cart_id, menu[0], 1).await;
    add_item(&app, cart_id, menu[1], 2).await;

    let (status, cart) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/carts/{cart_id}/items/{}", menu[0]),
            json!({ "qty": 4 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"][0]["qty"], 4);
    assert_eq!(decimal(&cart["total"]), BigDecimal::from_str("14.50").unwrap());

    let (status, cart) = send(
        &app,
        empty_request(Method::DELETE, &format!("/carts/{cart_id}/items/{}", menu[1])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(decimal(&cart["total"]), BigDecimal::from_str("12.00").unwrap());
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn failed_line_mutations_leave_the_cart_unchanged(pool: PgPool) {
    let app = app(pool);
    let (_, menu) = seed_menu(&app, &["5.00", "6.00"]).await;
    let cart_id = create_cart(&app).await;
    add_item(&app, cart_id, menu[0], 2).await;
    let before = get_cart(&app, cart_id).await;

    let (status, _) = send(
        &app,
        empty_request(Method::DELETE, &format!("/carts/{cart_id}/items/{}", menu[1])),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for qty in [0, -2] {
        let (status, _) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/carts/{cart_id}/items/{}", menu[0]),
                json!({ "qty": qty }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/carts/{cart_id}/items/{}", menu[1]),
            json!({ "qty": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(get_cart(&app, cart_id).await, before);
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn checkout_places_an_order_with_the_exact_total(pool: PgPool) {
    let app = app(pool.clone());
    let (_, menu) = seed_menu(&app, &["0.10", "0.20", "19.99"]).await;
    let cart_id = create_cart(&app).await;

    add_item(&app, cart_id, menu[0], 3).await;
    add_item(&app, cart_id, menu[1], 1).await;
    add_item(&app, cart_id, menu[2], 2).await;

    let (status, placed) = send(
        &app,
        empty_request(Method::POST, &format!("/carts/{cart_id}/checkout")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(placed["cart_id"], cart_id);
    assert_eq!(
        decimal(&placed["total_amount"]),
        BigDecimal::from_str("40.48").unwrap()
    );

    assert_eq!(get_cart(&app, cart_id).await["status"], "checked_out");

    let (status, fetched) = send(
        &app,
        empty_request(Method::GET, &format!("/orders/{}", placed["id"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, placed);

    let stored: BigDecimal =
        sqlx::query_scalar("SELECT total_amount FROM orders WHERE cart_id = $1")
            .bind(cart_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, BigDecimal::from_str("40.48").unwrap());
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn checked_out_cart_rejects_checkout_and_mutation(pool: PgPool) {
    let app = app(pool.clone());
    let (_, menu) = seed_menu(&app, &["8.00"]).await;
    let cart_id = create_cart(&app).await;
    add_item(&app, cart_id, menu[0], 1).await;

    let checkout = format!("/carts/{cart_id}/checkout");
    let (status, _) = send(&app, empty_request(Method::POST, &checkout)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, err) = send(&app, empty_request(Method::POST, &checkout)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Cart is already checked out");
    assert_eq!(order_count(&pool).await, 1);

    let (status, _) = add_item(&app, cart_id, menu[0], 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/carts/{cart_id}/items/{}", menu[0]),
            json!({ "qty": 3 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        empty_request(Method::DELETE, &format!("/carts/{cart_id}/items/{}", menu[0])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(get_cart(&app, cart_id).await["items"][0]["qty"], 1);
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn empty_or_missing_cart_cannot_be_checked_out(pool: PgPool) {
    let app = app(pool.clone());
    let cart_id = create_cart(&app).await;

    let (status, err) = send(
        &app,
        empty_request(Method::POST, &format!("/carts/{cart_id}/checkout")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Cart is empty");

    let (status, _) = send(&app, empty_request(Method::POST, "/carts/4242/checkout")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(order_count(&pool).await, 0);
    assert_eq!(get_cart(&app, cart_id).await["status"], "open");
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn concurrent_checkouts_place_a_single_order(pool: PgPool) {
    let app = app(pool.clone());
    let (_, menu) = seed_menu(&app, &["2.50"]).await;
    let cart_id = create_cart(&app).await;
    add_item(&app, cart_id, menu[0], 4).await;

    let checkout = format!("/carts/{cart_id}/checkout");
    let (first, second) = tokio::join!(
        send(&app, empty_request(Method::POST, &checkout)),
        send(&app, empty_request(Method::POST, &checkout)),
    );

    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    assert_eq!(order_count(&pool).await, 1);
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn merged_quantity_cannot_exceed_the_line_limit(pool: PgPool) {
    let app = app(pool);
    let (_, menu) = seed_menu(&app, &["1.00"]).await;
    let cart_id = create_cart(&app).await;

    let (status, _) = add_item(&app, cart_id, menu[0], 10_000).await;
    assert_eq!(status, StatusCode::OK);

    let (status, err) = add_item(&app, cart_id, menu[0], 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].is_string());

    let cart = get_cart(&app, cart_id).await;
    assert_eq!(cart["items"][0]["qty"], 10_000);
    assert_eq!(decimal(&cart["total"]), BigDecimal::from(10_000));
}
