//! Typed HTTP client for the `/api/{entity}` surface.
//!
//! One round trip per call: no retry, no caching and no request
//! deduplication. Each entity gets a [`ResourceClient`] bound to its path.

mod resource;

pub use resource::{
    CategoryClient, GameClient, MonitorClient, ProductClient, PurchaseClient, ResourceClient,
    UserClient,
};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// The five calls every resource collection answers.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Request: Serialize + Send + Sync;
    type Response: DeserializeOwned + Send;

    async fn get_all(&self) -> Result<Vec<Self::Response>, ClientError>;
    async fn get_by_id(&self, id: i32) -> Result<Self::Response, ClientError>;
    async fn create(&self, request: &Self::Request) -> Result<Self::Response, ClientError>;
    async fn update(
        &self,
        id: i32,
        request: &Self::Request,
    ) -> Result<Self::Response, ClientError>;
    async fn delete(&self, id: i32) -> Result<Self::Response, ClientError>;
}

/// Shared connection settings: the `reqwest` client and the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` is the server root or its `/api/` prefix; both resolve to
    /// the same endpoints.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("webshop-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(http, base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut raw = base_url.trim().trim_end_matches('/').to_string();
        if !raw.ends_with("/api") {
            raw.push_str("/api");
        }
        raw.push('/');
        let base_url =
            Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn categories(&self) -> CategoryClient {
        ResourceClient::new(self.clone(), "category")
    }

    pub fn products(&self) -> ProductClient {
        ResourceClient::new(self.clone(), "product")
    }

    pub fn games(&self) -> GameClient {
        ResourceClient::new(self.clone(), "game")
    }

    pub fn monitors(&self) -> MonitorClient {
        ResourceClient::new(self.clone(), "monitor")
    }

    pub fn purchases(&self) -> PurchaseClient {
        ResourceClient::new(self.clone(), "purchase")
    }

    pub fn users(&self) -> UserClient {
        ResourceClient::new(self.clone(), "user")
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
