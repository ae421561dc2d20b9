use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use video_catalog_api::{
    category::{
        domain::model::{
            entities::category::Category, queries::list_categories_query::CategoryFilter,
            value_objects::category_id::CategoryId,
        },
        infrastructure::persistence::repositories::{
            category_repository::CategoryRepository,
            in_memory::category_in_memory_repository::{
                CategoryInMemoryRepository, CategorySearchPolicy,
            },
        },
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

/// In-memory category store that records every existence check.
pub struct CountingCategoryRepository {
    inner: CategoryInMemoryRepository,
    exists_calls: AtomicUsize,
}

impl CountingCategoryRepository {
    pub fn with_items(categories: Vec<Category>) -> Self {
        Self {
            inner: CategoryInMemoryRepository::with_items(CategorySearchPolicy, categories),
            exists_calls: AtomicUsize::new(0),
        }
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Repository<Category> for CountingCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), CatalogDomainError> {
        self.inner.insert(category).await
    }

    async fn bulk_insert(&self, categories: &[Category]) -> Result<(), CatalogDomainError> {
        self.inner.bulk_insert(categories).await
    }

    async fn update(&self, category: &Category) -> Result<(), CatalogDomainError> {
        self.inner.update(category).await
    }

    async fn delete(&self, category_id: &CategoryId) -> Result<(), CatalogDomainError> {
        self.inner.delete(category_id).await
    }

    async fn find_by_id(
        &self,
        category_id: &CategoryId,
    ) -> Result<Option<Category>, CatalogDomainError> {
        self.inner.find_by_id(category_id).await
    }

    async fn find_all(&self) -> Result<Vec<Category>, CatalogDomainError> {
        self.inner.find_all().await
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CatalogDomainError> {
        self.inner.find_by_ids(ids).await
    }

    async fn exists_by_id(
        &self,
        ids: &[CategoryId],
    ) -> Result<ExistsByIdResult<CategoryId>, CatalogDomainError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_by_id(ids).await
    }
}

#[async_trait]
impl SearchableRepository<Category, CategoryFilter> for CountingCategoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        self.inner.sortable_fields()
    }

    async fn search(
        &self,
        params: &SearchParams<CategoryFilter>,
    ) -> Result<SearchResult<Category>, CatalogDomainError> {
        self.inner.search(params).await
    }
}

impl CategoryRepository for CountingCategoryRepository {}
