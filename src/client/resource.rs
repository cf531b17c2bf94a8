use super::{ApiClient, ClientError, ResourceApi};
use crate::dto::{
    CategoryRequest, CategoryResponse, GameRequest, GameResponse, MonitorRequest,
    MonitorResponse, ProductRequest, ProductResponse, PurchaseRequest, PurchaseResponse,
    UserRequest, UserResponse,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Method, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use tracing::debug;

pub type CategoryClient = ResourceClient<CategoryRequest, CategoryResponse>;
pub type ProductClient = ResourceClient<ProductRequest, ProductResponse>;
pub type GameClient = ResourceClient<GameRequest, GameResponse>;
pub type MonitorClient = ResourceClient<MonitorRequest, MonitorResponse>;
pub type PurchaseClient = ResourceClient<PurchaseRequest, PurchaseResponse>;
pub type UserClient = ResourceClient<UserRequest, UserResponse>;

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// HTTP access to one collection, e.g. `/api/game`.
#[derive(Debug)]
pub struct ResourceClient<Req, Resp> {
    api: ApiClient,
    path: &'static str,
    _shape: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> Clone for ResourceClient<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            path: self.path,
            _shape: PhantomData,
        }
    }
}

impl<Req, Resp> ResourceClient<Req, Resp> {
    pub fn new(api: ApiClient, path: &'static str) -> Self {
        Self {
            api,
            path,
            _shape: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    fn request(&self, method: Method, id: Option<i32>) -> Result<RequestBuilder, ClientError> {
        let path = match id {
            Some(id) => format!("{}/{}", self.path, id),
            None => self.path.to_string(),
        };
        let url = self.api.endpoint(&path)?;
        debug!(%method, %url, "webshop api call");
        Ok(self.api.http().request(method, url).headers(json_headers()))
    }
}

impl<Req, Resp> ResourceClient<Req, Resp>
where
    Resp: DeserializeOwned,
{
    async fn send(builder: RequestBuilder) -> Result<(StatusCode, String), ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok((status, body))
    }

    async fn fetch_one(builder: RequestBuilder) -> Result<Resp, ClientError> {
        let (_, body) = Self::send(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl<Req, Resp> ResourceApi for ResourceClient<Req, Resp>
where
    Req: Serialize + Send + Sync,
    Resp: DeserializeOwned + Send,
{
    type Request = Req;
    type Response = Resp;

    async fn get_all(&self) -> Result<Vec<Resp>, ClientError> {
        let (status, body) = Self::send(self.request(Method::GET, None)?).await?;
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_by_id(&self, id: i32) -> Result<Resp, ClientError> {
        Self::fetch_one(self.request(Method::GET, Some(id))?).await
    }

    async fn create(&self, request: &Req) -> Result<Resp, ClientError> {
        Self::fetch_one(self.request(Method::POST, None)?.json(request)).await
    }

    async fn update(&self, id: i32, request: &Req) -> Result<Resp, ClientError> {
        Self::fetch_one(self.request(Method::PUT, Some(id))?.json(request)).await
    }

    async fn delete(&self, id: i32) -> Result<Resp, ClientError> {
        Self::fetch_one(self.request(Method::DELETE, Some(id))?).await
    }
}
