mod common;

use axum::http::StatusCode;
use common::{response_json, TestApp};
use serde_json::{json, Value};

fn monitor_body(product_id: &Value, category_id: &Value) -> Value {
    json!({
        "brand": "Sony",
        "size": 27,
        "releaseYear": 2021,
        "productId": product_id,
        "categoryId": category_id
    })
}

#[tokio::test]
async fn monitor_crud_with_nested_relations() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/api/monitor").await.status(), StatusCode::NO_CONTENT);

    let category = app.create_category().await;
    let product = app.create_product().await;
    let created = app
        .create("/api/monitor", monitor_body(&product["id"], &category["id"]))
        .await;
    assert_eq!(created["brand"], "Sony");
    assert_eq!(created["releaseYear"], 2021);
    assert_eq!(created["product"], product);
    assert_eq!(created["category"], category);

    let uri = format!("/api/monitor/{}", created["id"]);
    assert_eq!(response_json(app.get(&uri).await).await, created);

    let mut changed = monitor_body(&product["id"], &category["id"]);
    changed["brand"] = json!("Dell");
    let response = app.put(&uri, changed).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["brand"], "Dell");

    let response = app.get("/api/monitor").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await.as_array().map(Vec::len), Some(1));

    assert_eq!(app.delete(&uri).await.status(), StatusCode::OK);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn several_monitors_may_share_a_product() {
    let app = TestApp::new().await;
    let category = app.create_category().await;
    let product = app.create_product().await;

    app.create("/api/monitor", monitor_body(&product["id"], &category["id"]))
        .await;
    app.create("/api/monitor", monitor_body(&product["id"], &category["id"]))
        .await;

    let list = response_json(app.get("/api/monitor").await).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/api/monitor/5").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/api/monitor/5").await.status(), StatusCode::NOT_FOUND);
    let response = app.put("/api/monitor/5", monitor_body(&json!(1), &json!(1))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn brand_length_is_validated() {
    let app = TestApp::new().await;

    let mut body = monitor_body(&json!(1), &json!(1));
    body["brand"] = json!("b".repeat(101));
    assert_eq!(app.post("/api/monitor", body).await.status(), StatusCode::BAD_REQUEST);

    let mut body = monitor_body(&json!(1), &json!(1));
    body.as_object_mut().unwrap().remove("size");
    assert_eq!(app.post("/api/monitor", body).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seeded_monitor_is_listed_with_relations() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/monitor").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = response_json(response).await;
    let monitor = &list[0];
    assert_eq!(monitor["brand"], "Sony");
    assert_eq!(monitor["size"], 15);
    assert_eq!(monitor["product"]["id"], monitor["productId"]);
    assert_eq!(monitor["category"]["id"], monitor["categoryId"]);
}
