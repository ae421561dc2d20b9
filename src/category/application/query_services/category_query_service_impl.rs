use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    category::{
        domain::{
            model::{
                entities::category::Category,
                queries::{
                    get_category_query::GetCategoryQuery,
                    list_categories_query::ListCategoriesQuery,
                },
            },
            services::category_query_service::CategoryQueryService,
        },
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    shared::domain::model::{
        entities::entity::Entity, enums::catalog_domain_error::CatalogDomainError,
        errors::not_found_error::NotFoundError, queries::search_result::SearchResult,
    },
};

pub struct CategoryQueryServiceImpl {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CategoryQueryServiceImpl {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryQueryService for CategoryQueryServiceImpl {
    async fn handle_get(&self, query: GetCategoryQuery) -> Result<Category, CatalogDomainError> {
        self.category_repository
            .find_by_id(query.category_id())
            .await?
            .ok_or_else(|| NotFoundError::new(query.category_id(), Category::NAME).into())
    }

    async fn handle_list(
        &self,
        query: ListCategoriesQuery,
    ) -> Result<SearchResult<Category>, CatalogDomainError> {
        self.category_repository.search(query.params()).await
    }
}
