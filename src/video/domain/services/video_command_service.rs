use async_trait::async_trait;

use crate::{
    shared::domain::model::enums::catalog_domain_error::CatalogDomainError,
    video::domain::model::{
        commands::{
            create_video_command::CreateVideoCommand, delete_video_command::DeleteVideoCommand,
            update_video_command::UpdateVideoCommand,
        },
        entities::video::Video,
    },
};

#[async_trait]
pub trait VideoCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateVideoCommand)
    -> Result<Video, CatalogDomainError>;

    async fn handle_update(&self, command: UpdateVideoCommand)
    -> Result<Video, CatalogDomainError>;

    async fn handle_delete(&self, command: DeleteVideoCommand) -> Result<(), CatalogDomainError>;
}
