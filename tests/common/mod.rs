#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use webshop_api::{config::AppConfig, db, AppState};

/// Helper harness for spinning up the full router backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with an empty, migrated schema.
    pub async fn new() -> Self {
        // A single connection keeps every query on the same in-memory database.
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        cfg.db_idle_timeout_secs = 3_600;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = webshop_api::build_router(state.clone());

        Self { router, state }
    }

    /// Same as [`TestApp::new`] with the demo catalog loaded.
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        db::seed_demo_data(&app.state.db)
            .await
            .expect("failed to seed demo data");
        app
    }

    /// Send a request against the router, with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Response {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.request(Method::DELETE, uri, None).await
    }

    /// POSTs `body` and returns the created record, asserting a 200.
    pub async fn create(&self, uri: &str, body: Value) -> Value {
        let response = self.post(uri, body).await;
        assert_eq!(response.status(), StatusCode::OK, "create on {uri} failed");
        response_json(response).await
    }

    pub async fn create_category(&self) -> Value {
        self.create(
            "/api/category",
            json!({"name": "Books", "description": "All books"}),
        )
        .await
    }

    pub async fn create_product(&self) -> Value {
        self.create(
            "/api/product",
            json!({
                "name": "Zelda",
                "price": 59.95,
                "description": "Breath of the Wild",
                "stock": 12
            }),
        )
        .await
    }

    pub async fn create_user(&self) -> Value {
        self.create(
            "/api/user",
            json!({
                "username": "alice",
                "password": "password1",
                "email": "alice@example.com",
                "userType": "Client"
            }),
        )
        .await
    }
}

/// Read the response body as raw bytes.
pub async fn response_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

/// Read the response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let bytes = response_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}
