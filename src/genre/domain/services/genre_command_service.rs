use async_trait::async_trait;

use crate::{
    genre::domain::model::{
        commands::{
            create_genre_command::CreateGenreCommand, delete_genre_command::DeleteGenreCommand,
            update_genre_command::UpdateGenreCommand,
        },
        entities::genre::Genre,
    },
    shared::domain::model::enums::catalog_domain_error::CatalogDomainError,
};

#[async_trait]
pub trait GenreCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateGenreCommand)
    -> Result<Genre, CatalogDomainError>;

    async fn handle_update(&self, command: UpdateGenreCommand)
    -> Result<Genre, CatalogDomainError>;

    async fn handle_delete(&self, command: DeleteGenreCommand) -> Result<(), CatalogDomainError>;
}
