use std::{
    cmp::Ordering,
    collections::HashSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::{
    domain::model::{
        entities::entity::Entity,
        enums::catalog_domain_error::CatalogDomainError,
        errors::not_found_error::NotFoundError,
        queries::{
            search_params::{SearchParams, SortDirection},
            search_result::SearchResult,
        },
    },
    infrastructure::persistence::repositories::searchable_repository::{
        ExistsByIdResult, Repository, SearchableRepository,
    },
};

/// Comparable projection of an entity field used for sorting.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

/// Aggregate-specific filtering and sorting rules plugged into
/// [`InMemorySearchableRepository`].
pub trait InMemorySearchPolicy<E: Entity>: Send + Sync {
    type Filter: Send + Sync;

    fn sortable_fields(&self) -> &'static [&'static str];

    fn matches(&self, entity: &E, filter: &Self::Filter) -> bool;

    fn sort_value(&self, entity: &E, field: &str) -> Option<SortValue>;
}

/// Vector-backed repository for tests and demos. Inserts never check for
/// duplicate ids.
pub struct InMemorySearchableRepository<E: Entity, P> {
    items: Mutex<Vec<E>>,
    policy: P,
}

impl<E: Entity, P: InMemorySearchPolicy<E>> InMemorySearchableRepository<E, P> {
    pub fn new(policy: P) -> Self {
        Self::with_items(policy, Vec::new())
    }

    pub fn with_items(policy: P, items: Vec<E>) -> Self {
        Self {
            items: Mutex::new(items),
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn items(&self) -> Vec<E> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_filter(&self, items: Vec<E>, filter: Option<&P::Filter>) -> Vec<E> {
        match filter {
            None => items,
            Some(filter) => items
                .into_iter()
                .filter(|entity| self.policy.matches(entity, filter))
                .collect(),
        }
    }

    fn apply_sort(
        &self,
        mut items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<E> {
        match sort.filter(|field| self.policy.sortable_fields().contains(field)) {
            Some(field) => {
                let direction = sort_dir.unwrap_or(SortDirection::Asc);
                items.sort_by(|a, b| {
                    let ordering = self
                        .policy
                        .sort_value(a, field)
                        .cmp(&self.policy.sort_value(b, field));
                    directed(ordering, direction)
                });
            }
            None => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        }
        items
    }

    fn apply_paginate(&self, items: Vec<E>, page: u64, per_page: u64) -> Vec<E> {
        let start = (page.saturating_sub(1)).saturating_mul(per_page) as usize;
        items
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect()
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[async_trait]
impl<E, P> Repository<E> for InMemorySearchableRepository<E, P>
where
    E: Entity,
    P: InMemorySearchPolicy<E>,
{
    async fn insert(&self, entity: &E) -> Result<(), CatalogDomainError> {
        self.lock().push(entity.clone());
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> Result<(), CatalogDomainError> {
        self.lock().extend_from_slice(entities);
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<(), CatalogDomainError> {
        let mut items = self.lock();
        let stored = items
            .iter_mut()
            .find(|item| item.entity_id() == entity.entity_id())
            .ok_or_else(|| NotFoundError::new(entity.entity_id(), E::NAME))?;
        *stored = entity.clone();
        Ok(())
    }

    async fn delete(&self, entity_id: &E::Id) -> Result<(), CatalogDomainError> {
        let mut items = self.lock();
        let position = items
            .iter()
            .position(|item| item.entity_id() == entity_id)
            .ok_or_else(|| NotFoundError::new(entity_id, E::NAME))?;
        items.remove(position);
        Ok(())
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> Result<Option<E>, CatalogDomainError> {
        Ok(self
            .lock()
            .iter()
            .find(|item| item.entity_id() == entity_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, CatalogDomainError> {
        Ok(self.items())
    }

    async fn find_by_ids(&self, ids: &[E::Id]) -> Result<Vec<E>, CatalogDomainError> {
        let wanted = ids.iter().collect::<HashSet<_>>();
        Ok(self
            .lock()
            .iter()
            .filter(|item| wanted.contains(item.entity_id()))
            .cloned()
            .collect())
    }

    async fn exists_by_id(
        &self,
        ids: &[E::Id],
    ) -> Result<ExistsByIdResult<E::Id>, CatalogDomainError> {
        let stored = self
            .lock()
            .iter()
            .map(|item| item.entity_id().clone())
            .collect::<HashSet<_>>();

        let (exists, not_exists): (Vec<_>, Vec<_>) =
            ids.iter().cloned().partition(|id| stored.contains(id));
        Ok(ExistsByIdResult { exists, not_exists })
    }
}

#[async_trait]
impl<E, P> SearchableRepository<E, P::Filter> for InMemorySearchableRepository<E, P>
where
    E: Entity,
    P: InMemorySearchPolicy<E>,
{
    fn sortable_fields(&self) -> &'static [&'static str] {
        self.policy.sortable_fields()
    }

    async fn search(
        &self,
        params: &SearchParams<P::Filter>,
    ) -> Result<SearchResult<E>, CatalogDomainError> {
        let items = self.items();
        let filtered = self.apply_filter(items, params.filter());
        let total = filtered.len() as u64;
        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir());
        let page = self.apply_paginate(sorted, params.page(), params.per_page());

        Ok(SearchResult::new(
            page,
            total,
            params.page(),
            params.per_page(),
        ))
    }
}
