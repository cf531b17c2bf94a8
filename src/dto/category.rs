use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Books",
    "description": "All books"
}))]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
}

/// Category as returned by the API, also nested inside games and monitors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<&CategoryResponse> for CategoryRequest {
    fn from(response: &CategoryResponse) -> Self {
        Self {
            name: response.name.clone(),
            description: response.description.clone(),
        }
    }
}

impl super::Identified for CategoryResponse {
    fn id(&self) -> i32 {
        self.id
    }
}
