use thiserror::Error;

use crate::shared::domain::model::errors::{
    entity_validation_error::EntityValidationError, invalid_uuid_error::InvalidUuidError,
    load_entity_error::LoadEntityError, not_found_error::NotFoundError,
    search_validation_error::SearchValidationError,
};

#[derive(Debug, Error)]
pub enum CatalogDomainError {
    #[error(transparent)]
    InvalidUuid(#[from] InvalidUuidError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    EntityValidation(#[from] EntityValidationError),

    #[error(transparent)]
    LoadEntity(#[from] LoadEntityError),

    #[error(transparent)]
    SearchValidation(#[from] SearchValidationError),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
