mod common;

use axum::http::StatusCode;
use common::{response_json, TestApp};
use serde_json::{json, Value};

fn purchase_body(date: &str, user_id: &Value, product_id: &Value) -> Value {
    json!({
        "purchaseDate": date,
        "userId": user_id,
        "productId": product_id
    })
}

#[tokio::test]
async fn purchase_crud_with_user_and_product() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/api/purchase").await.status(), StatusCode::NO_CONTENT);

    let user = app.create_user().await;
    let product = app.create_product().await;
    let created = app
        .create(
            "/api/purchase",
            purchase_body("2024-03-01", &user["id"], &product["id"]),
        )
        .await;
    assert_eq!(created["purchaseDate"], "2024-03-01");
    assert_eq!(created["user"], user);
    assert_eq!(created["product"], product);

    let uri = format!("/api/purchase/{}", created["id"]);
    assert_eq!(response_json(app.get(&uri).await).await, created);

    let response = app
        .put(&uri, purchase_body("2024-04-15", &user["id"], &product["id"]))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["purchaseDate"], "2024-04-15");

    assert_eq!(app.delete(&uri).await.status(), StatusCode::OK);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn timestamps_are_truncated_to_the_date() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let product = app.create_product().await;

    let created = app
        .create(
            "/api/purchase",
            purchase_body("2024-03-01T10:15:00Z", &user["id"], &product["id"]),
        )
        .await;
    assert_eq!(created["purchaseDate"], "2024-03-01");
}

#[tokio::test]
async fn unparseable_date_is_a_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/purchase", purchase_body("yesterday", &json!(1), &json!(1)))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_the_user_removes_their_purchases() {
    let app = TestApp::seeded().await;

    let before = response_json(app.get("/api/purchase").await).await;
    assert_eq!(before.as_array().map(Vec::len), Some(2));
    let user_id = before[0]["userId"].clone();

    let response = app.delete(&format!("/api/user/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = response_json(app.get("/api/purchase").await).await;
    let remaining = after.as_array().expect("one purchase left");
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0]["userId"], user_id);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/api/purchase/3").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/api/purchase/3").await.status(), StatusCode::NOT_FOUND);
    let response = app
        .put("/api/purchase/3", purchase_body("2024-01-01", &json!(1), &json!(1)))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
