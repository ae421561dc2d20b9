use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    cast_member::application::validations::cast_members_id_exists_in_storage_validator::CastMembersIdExistsInStorageValidator,
    category::application::validations::categories_id_exists_in_storage_validator::CategoriesIdExistsInStorageValidator,
    genre::application::validations::genres_id_exists_in_storage_validator::GenresIdExistsInStorageValidator,
    shared::{
        domain::model::{
            either::Either,
            entities::entity::Entity,
            enums::catalog_domain_error::CatalogDomainError,
            errors::{
                entity_validation_error::EntityValidationError, not_found_error::NotFoundError,
            },
            validation::notification::Notification,
        },
        infrastructure::persistence::repositories::unit_of_work::UnitOfWork,
    },
    video::{
        domain::{
            model::{
                commands::{
                    create_video_command::CreateVideoCommand,
                    delete_video_command::DeleteVideoCommand,
                    update_video_command::UpdateVideoCommand,
                },
                entities::video::{Video, VideoCreateProps},
                enums::rating::Rating,
            },
            services::video_command_service::VideoCommandService,
        },
        infrastructure::persistence::repositories::video_repository::VideoRepository,
    },
};

/// Existence checks for every relation a video can reference.
pub struct VideoRelationValidators {
    pub categories_id: CategoriesIdExistsInStorageValidator,
    pub genres_id: GenresIdExistsInStorageValidator,
    pub cast_members_id: CastMembersIdExistsInStorageValidator,
}

pub struct VideoCommandServiceImpl<U: UnitOfWork> {
    video_repository: Arc<dyn VideoRepository>,
    validators: VideoRelationValidators,
    unit_of_work: Arc<U>,
}

fn record_missing<T: ToString>(notification: &mut Notification, field: &str, errors: &[T]) {
    notification.set_error(errors.iter().map(ToString::to_string).collect(), Some(field));
}

impl<U: UnitOfWork> VideoCommandServiceImpl<U> {
    pub fn new(
        video_repository: Arc<dyn VideoRepository>,
        validators: VideoRelationValidators,
        unit_of_work: Arc<U>,
    ) -> Self {
        Self {
            video_repository,
            validators,
            unit_of_work,
        }
    }

    /// Checks the given relation lists and applies the ones that are fully
    /// present. Every missing id ends up in the video's notification under its
    /// relation field.
    async fn sync_relations(
        &self,
        video: &mut Video,
        categories_id: Option<&[String]>,
        genres_id: Option<&[String]>,
        cast_members_id: Option<&[String]>,
    ) -> Result<(), CatalogDomainError> {
        if let Some(raw_ids) = categories_id {
            match self.validators.categories_id.validate(raw_ids).await? {
                Either::Ok(ids) => video.sync_categories_id(ids),
                Either::Fail(errors) => {
                    record_missing(video.notification_mut(), "categories_id", &errors)
                }
            }
        }
        if let Some(raw_ids) = genres_id {
            match self.validators.genres_id.validate(raw_ids).await? {
                Either::Ok(ids) => video.sync_genres_id(ids),
                Either::Fail(errors) => {
                    record_missing(video.notification_mut(), "genres_id", &errors)
                }
            }
        }
        if let Some(raw_ids) = cast_members_id {
            match self.validators.cast_members_id.validate(raw_ids).await? {
                Either::Ok(ids) => video.sync_cast_members_id(ids),
                Either::Fail(errors) => {
                    record_missing(video.notification_mut(), "cast_members_id", &errors)
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> VideoCommandService for VideoCommandServiceImpl<U> {
    async fn handle_create(&self, command: CreateVideoCommand) -> Result<Video, CatalogDomainError> {
        let (rating, rating_error) = Rating::create(&command.rating).as_array();

        let mut video = Video::create(VideoCreateProps {
            title: command.title,
            description: command.description,
            year_launched: command.year_launched,
            duration: command.duration,
            rating: rating.unwrap_or(Rating::L),
            is_opened: command.is_opened,
            categories_id: Vec::new(),
            genres_id: Vec::new(),
            cast_members_id: Vec::new(),
        });
        if let Some(rating_error) = rating_error {
            video
                .notification_mut()
                .add_error(rating_error.to_string(), Some("rating"));
        }

        self.sync_relations(
            &mut video,
            Some(&command.categories_id),
            Some(&command.genres_id),
            Some(&command.cast_members_id),
        )
        .await?;

        if video.notification().has_errors() {
            return Err(EntityValidationError::from(video.notification()).into());
        }

        let video_id = *video.video_id();
        self.unit_of_work
            .run(async {
                self.video_repository.insert(&video).await?;
                self.unit_of_work.after_commit(Box::new(move || {
                    info!(video_id = %video_id, "video created");
                }));
                Ok::<(), CatalogDomainError>(())
            })
            .await?;

        Ok(video)
    }

    async fn handle_update(&self, command: UpdateVideoCommand) -> Result<Video, CatalogDomainError> {
        let mut video = self
            .video_repository
            .find_by_id(command.video_id())
            .await?
            .ok_or_else(|| NotFoundError::new(command.video_id(), Video::NAME))?;

        let changes = command.changes();
        if let Some(title) = &changes.title {
            video.change_title(title.clone());
        }
        if let Some(description) = &changes.description {
            video.change_description(description.clone());
        }
        if let Some(year_launched) = changes.year_launched {
            video.change_year_launched(year_launched);
        }
        if let Some(duration) = changes.duration {
            video.change_duration(duration);
        }
        if let Some(raw_rating) = &changes.rating {
            match Rating::create(raw_rating) {
                Either::Ok(rating) => video.change_rating(rating),
                Either::Fail(error) => video
                    .notification_mut()
                    .add_error(error.to_string(), Some("rating")),
            }
        }
        match changes.is_opened {
            Some(true) => video.mark_as_opened(),
            Some(false) => video.mark_as_not_opened(),
            None => {}
        }

        self.sync_relations(
            &mut video,
            changes.categories_id.as_deref(),
            changes.genres_id.as_deref(),
            changes.cast_members_id.as_deref(),
        )
        .await?;

        if video.notification().has_errors() {
            return Err(EntityValidationError::from(video.notification()).into());
        }

        self.unit_of_work
            .run(self.video_repository.update(&video))
            .await?;

        Ok(video)
    }

    async fn handle_delete(&self, command: DeleteVideoCommand) -> Result<(), CatalogDomainError> {
        let video_id = *command.video_id();
        self.unit_of_work
            .run(async {
                self.video_repository.delete(&video_id).await?;
                self.unit_of_work.after_commit(Box::new(move || {
                    info!(video_id = %video_id, "video deleted");
                }));
                Ok::<(), CatalogDomainError>(())
            })
            .await
    }
}
