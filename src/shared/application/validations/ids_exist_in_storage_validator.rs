use std::{marker::PhantomData, sync::Arc};

use crate::shared::{
    domain::model::{
        either::Either, entities::entity::Entity,
        enums::catalog_domain_error::CatalogDomainError, errors::not_found_error::NotFoundError,
        value_objects::entity_id::EntityId,
    },
    infrastructure::persistence::repositories::searchable_repository::Repository,
};

/// Batch check that identifiers referenced by another aggregate exist.
///
/// A malformed identifier is an error of its own (`InvalidUuidError`), while
/// missing identifiers are the expected `Fail` outcome with one
/// `NotFoundError` per id.
pub struct IdsExistInStorageValidator<E: Entity, R: Repository<E> + ?Sized> {
    repository: Arc<R>,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: Repository<E> + ?Sized> IdsExistInStorageValidator<E, R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            entity: PhantomData,
        }
    }

    pub async fn validate(
        &self,
        raw_ids: &[String],
    ) -> Result<Either<Vec<E::Id>, Vec<NotFoundError>>, CatalogDomainError> {
        let ids = raw_ids
            .iter()
            .map(|raw| E::Id::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let partition = self.repository.exists_by_id(&ids).await?;
        if !partition.not_exists.is_empty() {
            return Ok(Either::Fail(
                partition
                    .not_exists
                    .iter()
                    .map(|id| NotFoundError::new(id, E::NAME))
                    .collect(),
            ));
        }

        Ok(Either::Ok(ids))
    }
}
