mod common;

use axum::http::StatusCode;
use common::{response_json, TestApp};
use serde_json::json;
use test_case::test_case;

#[tokio::test]
async fn create_then_get_round_trips_price_as_number() {
    let app = TestApp::new().await;

    let created = app.create_product().await;
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["name"], "Zelda");
    assert_eq!(created["stock"], 12);
    let price = created["price"].as_f64().expect("price is a JSON number");
    assert!((price - 59.95).abs() < 1e-9);

    let fetched = response_json(app.get(&format!("/api/product/{id}")).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_on_empty_table_is_not_found() {
    let app = TestApp::new().await;

    let response = app.delete("/api/product/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_reflects_stored_rows() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/api/product").await.status(), StatusCode::NO_CONTENT);

    app.create_product().await;
    let response = app.get("/api/product").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = TestApp::new().await;
    let id = app.create_product().await["id"].as_i64().unwrap();

    let response = app
        .put(
            &format!("/api/product/{id}"),
            json!({"name": "Mario", "price": 49.5, "description": "Odyssey", "stock": 3}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Mario");
    assert_eq!(body["description"], "Odyssey");
    assert_eq!(body["stock"], 3);
}

#[test_case(json!({"name": "A", "price": 50001, "description": "d", "stock": 1}) ; "price above range")]
#[test_case(json!({"name": "A", "price": -1, "description": "d", "stock": 1}) ; "negative price")]
#[test_case(json!({"name": "A", "price": 1, "description": "d", "stock": 0}) ; "stock below range")]
#[test_case(json!({"name": "A", "price": 1, "description": "d", "stock": 100001}) ; "stock above range")]
#[test_case(json!({"price": 1, "description": "d", "stock": 1}) ; "missing name")]
#[tokio::test]
async fn out_of_range_requests_are_rejected(body: serde_json::Value) {
    let app = TestApp::new().await;

    let response = app.post("/api/product", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/api/product").await.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn boundary_values_are_accepted() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/product",
            json!({"name": "Free", "price": 0, "description": "d", "stock": 100000}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post(
            "/api/product",
            json!({"name": "Dear", "price": 50000, "description": "d", "stock": 1}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn deleting_a_product_cascades_to_its_game() {
    let app = TestApp::new().await;
    let category_id = app.create_category().await["id"].as_i64().unwrap();
    let product_id = app.create_product().await["id"].as_i64().unwrap();
    let game = app
        .create(
            "/api/game",
            json!({
                "publisher": "Nintendo",
                "publishedYear": 2017,
                "language": "English",
                "genre": "Adventure",
                "productId": product_id,
                "categoryId": category_id
            }),
        )
        .await;

    let response = app.delete(&format!("/api/product/{product_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get(&format!("/api/game/{}", game["id"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
