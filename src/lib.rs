//! WebShop API Library
//!
//! Catalog storage, HTTP surface and admin client for the WebShop
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod client;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;
pub mod views;

use axum::{routing::get, Router};
use http::HeaderValue;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Builds the state with every service bound to `db`.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// The six resource collections, each mounted under `/api/{entity}`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/category", handlers::categories::category_routes())
        .nest("/product", handlers::products::product_routes())
        .nest("/game", handlers::games::game_routes())
        .nest("/monitor", handlers::monitors::monitor_routes())
        .nest("/purchase", handlers::purchases::purchase_routes())
        .nest("/user", handlers::users::user_routes())
}

/// Explicit origins win; otherwise permissive only where configuration allows it.
pub fn build_cors_layer(cfg: &config::AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if cfg.should_allow_permissive_cors() {
        ::tracing::info!(
            "Using permissive CORS because explicit origins were not configured ({})",
            if cfg.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
        CorsLayer::permissive()
    } else {
        ::tracing::warn!(
            "No CORS origins configured; set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true"
        );
        CorsLayer::new()
    }
}

/// Full application router: API, health probe, Swagger UI and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config);

    Router::<AppState>::new()
        .route("/", get(|| async { "webshop-api up" }))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_logging_middleware,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(tracing::RequestSpanMaker))
        .layer(cors_layer)
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
