mod common;

use axum::http::StatusCode;
use common::{response_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn eight_character_password_is_accepted_on_update() {
    let app = TestApp::seeded().await;

    let response = app
        .put(
            "/api/user/1",
            json!({
                "username": "a",
                "password": "shortpw!",
                "email": "x@y.com",
                "userType": "Client"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "username": "a",
            "password": "shortpw!",
            "email": "x@y.com",
            "userType": "Client"
        })
    );
}

#[tokio::test]
async fn seven_character_password_is_rejected() {
    let app = TestApp::seeded().await;

    let response = app
        .put(
            "/api/user/1",
            json!({
                "username": "a",
                "password": "shortpw",
                "email": "x@y.com",
                "userType": "Client"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = response_json(app.get("/api/user/1").await).await;
    assert_eq!(stored["username"], "TestUsername");
}

#[tokio::test]
async fn user_crud_round_trip() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/api/user").await.status(), StatusCode::NO_CONTENT);

    let created = app.create_user().await;
    assert_eq!(created["userType"], "Client");
    let uri = format!("/api/user/{}", created["id"]);
    assert_eq!(response_json(app.get(&uri).await).await, created);

    let response = app.delete(&uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn username_longer_than_twenty_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/user",
            json!({
                "username": "u".repeat(21),
                "password": "password1",
                "email": "u@example.com",
                "userType": "Client"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
