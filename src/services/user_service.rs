use crate::dto::{UserRequest, UserResponse};
use crate::entities::user;
use crate::errors::ServiceError;
use crate::repositories::UserRepository;
use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(
        &self,
        request: UserRequest,
    ) -> Result<Option<UserResponse>, ServiceError>;
    async fn get_all_users(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserResponse>, ServiceError>;
    async fn update_user(
        &self,
        id: i32,
        request: UserRequest,
    ) -> Result<Option<UserResponse>, ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<Option<UserResponse>, ServiceError>;
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password: model.password,
            email: model.email,
            user_type: model.user_type,
        }
    }
}

/// All four fields are written on both create and update.
fn user_row(request: UserRequest) -> user::ActiveModel {
    user::ActiveModel {
        username: Set(request.username),
        password: Set(request.password),
        email: Set(request.email),
        user_type: Set(request.user_type),
        ..Default::default()
    }
}

pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn create_user(
        &self,
        request: UserRequest,
    ) -> Result<Option<UserResponse>, ServiceError> {
        let created = self.repository.insert(user_row(request)).await?;
        Ok(created.map(Into::into))
    }

    async fn get_all_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let rows = self.repository.select_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_user_by_id(&self, id: i32) -> Result<Option<UserResponse>, ServiceError> {
        Ok(self.repository.select_by_id(id).await?.map(Into::into))
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn update_user(
        &self,
        id: i32,
        request: UserRequest,
    ) -> Result<Option<UserResponse>, ServiceError> {
        let updated = self.repository.update_by_id(id, user_row(request)).await?;
        Ok(updated.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: i32) -> Result<Option<UserResponse>, ServiceError> {
        Ok(self.repository.delete_by_id(id).await?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;
    use sea_orm::ActiveValue;

    #[tokio::test]
    async fn update_overwrites_email_too() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_by_id()
            .withf(|id, patch| {
                *id == 1 && patch.email == ActiveValue::Set("new@example.com".to_string())
            })
            .times(1)
            .returning(|id, _| {
                Ok(Some(user::Model {
                    id,
                    username: "a".into(),
                    password: "shortpw!".into(),
                    email: "new@example.com".into(),
                    user_type: "Client".into(),
                }))
            });
        let service = UserServiceImpl::new(Arc::new(repo));

        let updated = service
            .update_user(
                1,
                UserRequest {
                    username: "a".into(),
                    password: "shortpw!".into(),
                    email: "new@example.com".into(),
                    user_type: "Client".into(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.user_type, "Client");
    }

    #[tokio::test]
    async fn get_all_on_empty_table_is_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_select_all().returning(|| Ok(Vec::new()));
        let service = UserServiceImpl::new(Arc::new(repo));

        assert!(service.get_all_users().await.unwrap().is_empty());
    }
}
