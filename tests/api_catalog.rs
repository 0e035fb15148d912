mod common;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use common::{app, empty_request, json_request, send};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_restaurant(app: &Router, body: Value) -> i64 {
    let (status, restaurant) = send(app, json_request(Method::POST, "/restaurants", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    restaurant["id"].as_i64().unwrap()
}

async fn create_menu_item(app: &Router, restaurant_id: i64, body: Value) -> Value {
    let (status, menu_item) = send(
        app,
        json_request(
            Method::POST,
            &format!("/restaurants/{restaurant_id}/menu"),
            body,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    menu_item
}

fn names(values: &Value) -> Vec<&str> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value["name"].as_str().unwrap())
        .collect()
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn lists_restaurants_in_pages(pool: PgPool) {
    let app = app(pool);
    for i in 0..5 {
        create_restaurant(&app, json!({ "name": format!("Place {i}") })).await;
    }

    let (status, page) = send(&app, empty_request(Method::GET, "/restaurants?skip=1&limit=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&page), vec!["Place 1", "Place 2"]);

    let (_, all) = send(&app, empty_request(Method::GET, "/restaurants")).await;
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn fetches_a_restaurant_and_its_menu(pool: PgPool) {
    let app = app(pool);
    let restaurant_id = create_restaurant(
        &app,
        json!({ "name": "Sakura", "cuisine": "Japanese", "rating": "4.5" }),
    )
    .await;

    let menu_item = create_menu_item(
        &app,
        restaurant_id,
        json!({ "name": "Ramen", "description": "Tonkotsu broth", "price": "13.90" }),
    )
    .await;
    assert_eq!(menu_item["is_available"], true);

    let (status, restaurant) = send(
        &app,
        empty_request(Method::GET, &format!("/restaurants/{restaurant_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restaurant["cuisine"], "Japanese");

    let (status, menu) = send(
        &app,
        empty_request(Method::GET, &format!("/restaurants/{restaurant_id}/menu")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu, json!([menu_item]));
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn missing_restaurant_is_not_found(pool: PgPool) {
    let app = app(pool);

    for (method, uri) in [
        (Method::GET, "/restaurants/77"),
        (Method::GET, "/restaurants/77/menu"),
    ] {
        let (status, _) = send(&app, empty_request(method, uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/restaurants/77/menu",
            json!({ "name": "Ghost dish", "price": "1.00" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request(Method::PATCH, "/restaurants/77/menu/1", json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn search_matches_case_insensitive_substrings(pool: PgPool) {
    let app = app(pool);
    let pizzeria = create_restaurant(&app, json!({ "name": "Pizzeria Napoli", "cuisine": "Italian" })).await;
    let diner = create_restaurant(&app, json!({ "name": "Blue Diner", "cuisine": "American" })).await;

    create_menu_item(&app, pizzeria, json!({ "name": "Margherita", "price": "9.00" })).await;
    create_menu_item(
        &app,
        diner,
        json!({ "name": "Cheeseburger", "description": "With pizza sauce", "price": "11.00" }),
    )
    .await;

    let (status, result) = send(&app, empty_request(Method::GET, "/search?q=PIZZ")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&result["restaurants"]), vec!["Pizzeria Napoli"]);
    assert_eq!(names(&result["menu_items"]), vec!["Cheeseburger"]);

    let (_, result) = send(&app, empty_request(Method::GET, "/search?q=italian")).await;
    assert_eq!(names(&result["restaurants"]), vec!["Pizzeria Napoli"]);
    assert_eq!(result["menu_items"], json!([]));
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn search_treats_wildcards_literally(pool: PgPool) {
    let app = app(pool);
    create_restaurant(&app, json!({ "name": "100% Vegan" })).await;
    create_restaurant(&app, json!({ "name": "Burger Barn" })).await;

    let (_, result) = send(&app, empty_request(Method::GET, "/search?q=%25")).await;
    assert_eq!(names(&result["restaurants"]), vec!["100% Vegan"]);

    let (_, result) = send(&app, empty_request(Method::GET, "/search?q=_")).await;
    assert_eq!(result["restaurants"], json!([]));
}

#[sqlx::test]
#[ignore = "requires a running Postgres instance (DATABASE_URL)"]
async fn prices_outside_the_column_range_are_rejected(pool: PgPool) {
    let app = app(pool.clone());
    let restaurant_id = create_restaurant(&app, json!({ "name": "Corner Cafe" })).await;
    let menu_item = create_menu_item(
        &app,
        restaurant_id,
        json!({ "name": "Espresso", "price": "2.40" }),
    )
    .await;

    for price in ["0.001", "100000000"] {
        let (status, _) = send(
            &app,
            json_request(
                Method::POST,
                &format!("/restaurants/{restaurant_id}/menu"),
                json!({ "name": "Latte", "price": price }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");

        let (status, _) = send(
            &app,
            json_request(
                Method::PATCH,
                &format!("/restaurants/{restaurant_id}/menu/{}", menu_item["id"]),
                json!({ "price": price }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
