use super::{CategoryResponse, ProductResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "publisher": "FromSoftware",
    "publishedYear": 2022,
    "language": "English",
    "genre": "RPG",
    "productId": 1,
    "categoryId": 1
}))]
pub struct GameRequest {
    #[validate(length(min = 1, max = 50))]
    pub publisher: String,
    #[validate(range(min = 1900, max = 3000))]
    pub published_year: i32,
    #[validate(length(min = 1, max = 32))]
    pub language: String,
    #[validate(length(min = 1, max = 32))]
    pub genre: String,
    #[validate(range(min = 1, max = 1000000))]
    pub product_id: i32,
    #[validate(range(min = 1, max = 1000000))]
    pub category_id: i32,
}

/// Game with its product and category attached. When either relation is
/// missing both nested objects are defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: i32,
    pub publisher: String,
    pub published_year: i32,
    pub language: String,
    pub genre: String,
    pub product_id: i32,
    pub category_id: i32,
    pub product: ProductResponse,
    pub category: CategoryResponse,
}

impl From<&GameResponse> for GameRequest {
    fn from(response: &GameResponse) -> Self {
        Self {
            publisher: response.publisher.clone(),
            language: response.language.clone(),
            genre: response.genre.clone(),
            published_year: response.published_year,
            product_id: response.product_id,
            category_id: response.category_id,
        }
    }
}

impl super::Identified for GameResponse {
    fn id(&self) -> i32 {
        self.id
    }
}
