use crate::dto::{CategoryRequest, CategoryResponse};
use crate::entities::category;
use crate::errors::ServiceError;
use crate::repositories::CategoryRepository;
use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create_category(
        &self,
        request: CategoryRequest,
    ) -> Result<Option<CategoryResponse>, ServiceError>;
    async fn get_all_categories(&self) -> Result<Vec<CategoryResponse>, ServiceError>;
    async fn get_category_by_id(&self, id: i32) -> Result<Option<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        id: i32,
        request: CategoryRequest,
    ) -> Result<Option<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<Option<CategoryResponse>, ServiceError>;
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

fn category_row(request: CategoryRequest) -> category::ActiveModel {
    category::ActiveModel {
        name: Set(request.name),
        description: Set(request.description),
        ..Default::default()
    }
}

pub struct CategoryServiceImpl {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryServiceImpl {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    #[instrument(skip(self))]
    async fn create_category(
        &self,
        request: CategoryRequest,
    ) -> Result<Option<CategoryResponse>, ServiceError> {
        let created = self.repository.insert(category_row(request)).await?;
        Ok(created.map(Into::into))
    }

    async fn get_all_categories(&self) -> Result<Vec<CategoryResponse>, ServiceError> {
        let rows = self.repository.select_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_category_by_id(&self, id: i32) -> Result<Option<CategoryResponse>, ServiceError> {
        Ok(self.repository.select_by_id(id).await?.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn update_category(
        &self,
        id: i32,
        request: CategoryRequest,
    ) -> Result<Option<CategoryResponse>, ServiceError> {
        let updated = self
            .repository
            .update_by_id(id, category_row(request))
            .await?;
        Ok(updated.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, id: i32) -> Result<Option<CategoryResponse>, ServiceError> {
        Ok(self.repository.delete_by_id(id).await?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::category_repository::MockCategoryRepository;
    use assert_matches::assert_matches;
    use mockall::predicate::eq;
    use sea_orm::{ActiveValue, DbErr};

    fn books() -> category::Model {
        category::Model {
            id: 3,
            name: "Books".into(),
            description: "All books".into(),
        }
    }

    fn request() -> CategoryRequest {
        CategoryRequest {
            name: "Books".into(),
            description: "All books".into(),
        }
    }

    #[tokio::test]
    async fn create_maps_request_without_id() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert()
            .withf(|row| {
                row.id == ActiveValue::NotSet
                    && row.name == ActiveValue::Set("Books".to_string())
                    && row.description == ActiveValue::Set("All books".to_string())
            })
            .times(1)
            .returning(|_| Ok(Some(books())));
        let service = CategoryServiceImpl::new(Arc::new(repo));

        let created = service.create_category(request()).await.unwrap().unwrap();
        assert_eq!(
            created,
            CategoryResponse {
                id: 3,
                name: "Books".into(),
                description: "All books".into(),
            }
        );
    }

    #[tokio::test]
    async fn create_without_gateway_result_is_none() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert().returning(|_| Ok(None));
        let service = CategoryServiceImpl::new(Arc::new(repo));

        assert!(service.create_category(request()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_maps_every_row() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_select_all().returning(|| {
            Ok(vec![
                books(),
                category::Model {
                    id: 4,
                    name: "Games".into(),
                    description: "Video games".into(),
                },
            ])
        });
        let service = CategoryServiceImpl::new(Arc::new(repo));

        let all = service.get_all_categories().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "Games");
    }

    #[tokio::test]
    async fn missing_rows_are_none() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_select_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));
        repo.expect_update_by_id().returning(|_, _| Ok(None));
        repo.expect_delete_by_id().returning(|_| Ok(None));
        let service = CategoryServiceImpl::new(Arc::new(repo));

        assert!(service.get_category_by_id(42).await.unwrap().is_none());
        assert!(service.update_category(42, request()).await.unwrap().is_none());
        assert!(service.delete_category(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn gateway_errors_propagate() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_select_all()
            .returning(|| Err(ServiceError::DatabaseError(DbErr::Custom("down".into()))));
        let service = CategoryServiceImpl::new(Arc::new(repo));

        assert_matches!(
            service.get_all_categories().await,
            Err(ServiceError::DatabaseError(_))
        );
    }
}
