use async_trait::async_trait;

use crate::shared::domain::model::{
    entities::entity::Entity,
    enums::catalog_domain_error::CatalogDomainError,
    queries::{search_params::SearchParams, search_result::SearchResult},
};

/// Partition of a batch of identifiers into the ones found in storage and
/// the ones that are missing, each in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExistsByIdResult<Id> {
    pub exists: Vec<Id>,
    pub not_exists: Vec<Id>,
}

impl<Id> Default for ExistsByIdResult<Id> {
    fn default() -> Self {
        Self {
            exists: Vec::new(),
            not_exists: Vec::new(),
        }
    }
}

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn insert(&self, entity: &E) -> Result<(), CatalogDomainError>;

    async fn bulk_insert(&self, entities: &[E]) -> Result<(), CatalogDomainError>;

    /// Fails with `NotFoundError` when no stored entity has the same id.
    async fn update(&self, entity: &E) -> Result<(), CatalogDomainError>;

    /// Fails with `NotFoundError` when `entity_id` is unknown.
    async fn delete(&self, entity_id: &E::Id) -> Result<(), CatalogDomainError>;

    async fn find_by_id(&self, entity_id: &E::Id) -> Result<Option<E>, CatalogDomainError>;

    async fn find_all(&self) -> Result<Vec<E>, CatalogDomainError>;

    async fn find_by_ids(&self, ids: &[E::Id]) -> Result<Vec<E>, CatalogDomainError>;

    async fn exists_by_id(
        &self,
        ids: &[E::Id],
    ) -> Result<ExistsByIdResult<E::Id>, CatalogDomainError>;
}

#[async_trait]
pub trait SearchableRepository<E: Entity, F: Send + Sync>: Repository<E> {
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Filter, then sort, then paginate. Unknown or missing sort fields fall
    /// back to `created_at` descending.
    async fn search(
        &self,
        params: &SearchParams<F>,
    ) -> Result<SearchResult<E>, CatalogDomainError>;
}
