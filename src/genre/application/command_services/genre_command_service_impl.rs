use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    category::application::validations::categories_id_exists_in_storage_validator::CategoriesIdExistsInStorageValidator,
    genre::{
        domain::{
            model::{
                commands::{
                    create_genre_command::CreateGenreCommand,
                    delete_genre_command::DeleteGenreCommand,
                    update_genre_command::UpdateGenreCommand,
                },
                entities::genre::{Genre, GenreCreateProps},
            },
            services::genre_command_service::GenreCommandService,
        },
        infrastructure::persistence::repositories::genre_repository::GenreRepository,
    },
    shared::{
        domain::model::{
            either::Either,
            entities::entity::Entity,
            enums::catalog_domain_error::CatalogDomainError,
            errors::{
                entity_validation_error::EntityValidationError, not_found_error::NotFoundError,
            },
        },
        infrastructure::persistence::repositories::unit_of_work::UnitOfWork,
    },
};

pub struct GenreCommandServiceImpl<U: UnitOfWork> {
    genre_repository: Arc<dyn GenreRepository>,
    categories_id_validator: CategoriesIdExistsInStorageValidator,
    unit_of_work: Arc<U>,
}

impl<U: UnitOfWork> GenreCommandServiceImpl<U> {
    pub fn new(
        genre_repository: Arc<dyn GenreRepository>,
        categories_id_validator: CategoriesIdExistsInStorageValidator,
        unit_of_work: Arc<U>,
    ) -> Self {
        Self {
            genre_repository,
            categories_id_validator,
            unit_of_work,
        }
    }

    /// Replaces the genre's categories with `raw_ids` when they all exist;
    /// otherwise records one message per missing category.
    async fn sync_categories(
        &self,
        genre: &mut Genre,
        raw_ids: &[String],
    ) -> Result<(), CatalogDomainError> {
        match self.categories_id_validator.validate(raw_ids).await? {
            Either::Ok(categories_id) => genre.sync_categories_id(categories_id),
            Either::Fail(errors) => genre.notification_mut().set_error(
                errors.iter().map(ToString::to_string).collect(),
                Some("categories_id"),
            ),
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> GenreCommandService for GenreCommandServiceImpl<U> {
    async fn handle_create(&self, command: CreateGenreCommand) -> Result<Genre, CatalogDomainError> {
        let mut genre = Genre::create(GenreCreateProps {
            name: command.name().to_string(),
            categories_id: Vec::new(),
            is_active: command.is_active(),
        });
        self.sync_categories(&mut genre, command.categories_id())
            .await?;

        if genre.notification().has_errors() {
            return Err(EntityValidationError::from(genre.notification()).into());
        }

        let genre_id = *genre.genre_id();
        self.unit_of_work
            .run(async {
                self.genre_repository.insert(&genre).await?;
                self.unit_of_work.after_commit(Box::new(move || {
                    info!(genre_id = %genre_id, "genre created");
                }));
                Ok::<(), CatalogDomainError>(())
            })
            .await?;

        Ok(genre)
    }

    async fn handle_update(&self, command: UpdateGenreCommand) -> Result<Genre, CatalogDomainError> {
        let mut genre = self
            .genre_repository
            .find_by_id(command.genre_id())
            .await?
            .ok_or_else(|| NotFoundError::new(command.genre_id(), Genre::NAME))?;

        if let Some(name) = command.name() {
            genre.change_name(name.to_string());
        }
        if let Some(raw_ids) = command.categories_id() {
            self.sync_categories(&mut genre, raw_ids).await?;
        }
        match command.is_active() {
            Some(true) => genre.activate(),
            Some(false) => genre.deactivate(),
            None => {}
        }

        if genre.notification().has_errors() {
            return Err(EntityValidationError::from(genre.notification()).into());
        }

        self.unit_of_work
            .run(self.genre_repository.update(&genre))
            .await?;

        Ok(genre)
    }

    async fn handle_delete(&self, command: DeleteGenreCommand) -> Result<(), CatalogDomainError> {
        let genre_id = *command.genre_id();
        self.unit_of_work
            .run(async {
                self.genre_repository.delete(&genre_id).await?;
                self.unit_of_work.after_commit(Box::new(move || {
                    info!(genre_id = %genre_id, "genre deleted");
                }));
                Ok::<(), CatalogDomainError>(())
            })
            .await
    }
}
