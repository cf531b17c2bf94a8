use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "username": "jdoe",
    "password": "hunter2hunter2",
    "email": "jdoe@example.com",
    "userType": "Client"
}))]
pub struct UserRequest {
    #[validate(length(min = 1, max = 20))]
    pub username: String,
    #[validate(length(min = 8, max = 100))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub user_type: String,
}

/// User as returned by the API, also nested inside purchases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub user_type: String,
}

impl From<&UserResponse> for UserRequest {
    fn from(response: &UserResponse) -> Self {
        Self {
            username: response.username.clone(),
            password: response.password.clone(),
            email: response.email.clone(),
            user_type: response.user_type.clone(),
        }
    }
}

impl super::Identified for UserResponse {
    fn id(&self) -> i32 {
        self.id
    }
}
