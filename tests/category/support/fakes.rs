use async_trait::async_trait;
use video_catalog_api::{
    category::{
        domain::model::{
            entities::category::Category, queries::list_categories_query::CategoryFilter,
            value_objects::category_id::CategoryId,
        },
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    shared::{
        domain::model::{
            enums::catalog_domain_error::CatalogDomainError,
            queries::{search_params::SearchParams, search_result::SearchResult},
        },
        infrastructure::persistence::repositories::searchable_repository::{
            ExistsByIdResult, Repository, SearchableRepository,
        },
    },
};

/// Repository whose storage is always down.
pub struct UnavailableCategoryRepository;

fn unavailable() -> CatalogDomainError {
    CatalogDomainError::InfrastructureError("connection refused".to_string())
}

#[async_trait]
impl Repository<Category> for UnavailableCategoryRepository {
    async fn insert(&self, _category: &Category) -> Result<(), CatalogDomainError> {
        Err(unavailable())
    }

    async fn bulk_insert(&self, _categories: &[Category]) -> Result<(), CatalogDomainError> {
        Err(unavailable())
    }

    async fn update(&self, _category: &Category) -> Result<(), CatalogDomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _category_id: &CategoryId) -> Result<(), CatalogDomainError> {
        Err(unavailable())
    }

    async fn find_by_id(
        &self,
        _category_id: &CategoryId,
    ) -> Result<Option<Category>, CatalogDomainError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Category>, CatalogDomainError> {
        Err(unavailable())
    }

    async fn find_by_ids(&self, _ids: &[CategoryId]) -> Result<Vec<Category>, CatalogDomainError> {
        Err(unavailable())
    }

    async fn exists_by_id(
        &self,
        _ids: &[CategoryId],
    ) -> Result<ExistsByIdResult<CategoryId>, CatalogDomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SearchableRepository<Category, CategoryFilter> for UnavailableCategoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        &[]
    }

    async fn search(
        &self,
        _params: &SearchParams<CategoryFilter>,
    ) -> Result<SearchResult<Category>, CatalogDomainError> {
        Err(unavailable())
    }
}

impl CategoryRepository for UnavailableCategoryRepository {}
