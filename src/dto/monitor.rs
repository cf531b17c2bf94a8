use super::{CategoryResponse, ProductResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "brand": "Sony",
    "size": 27,
    "releaseYear": 2021,
    "productId": 2,
    "categoryId": 2
}))]
pub struct MonitorRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    pub size: i32,
    pub release_year: i32,
    pub product_id: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorResponse {
    pub id: i32,
    pub brand: String,
    pub size: i32,
    pub release_year: i32,
    pub product_id: i32,
    pub category_id: i32,
    pub product: ProductResponse,
    pub category: CategoryResponse,
}

impl From<&MonitorResponse> for MonitorRequest {
    fn from(response: &MonitorResponse) -> Self {
        Self {
            brand: response.brand.clone(),
            size: response.size,
            release_year: response.release_year,
            product_id: response.product_id,
            category_id: response.category_id,
        }
    }
}

impl super::Identified for MonitorResponse {
    fn id(&self) -> i32 {
        self.id
    }
}
