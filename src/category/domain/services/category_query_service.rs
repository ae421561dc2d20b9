use async_trait::async_trait;

use crate::{
    category::domain::model::{
        entities::category::Category,
        queries::{
            get_category_query::GetCategoryQuery, list_categories_query::ListCategoriesQuery,
        },
    },
    shared::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, queries::search_result::SearchResult,
    },
};

#[async_trait]
pub trait CategoryQueryService: Send + Sync {
    async fn handle_get(&self, query: GetCategoryQuery) -> Result<Category, CatalogDomainError>;

    async fn handle_list(
        &self,
        query: ListCategoriesQuery,
    ) -> Result<SearchResult<Category>, CatalogDomainError>;
}
