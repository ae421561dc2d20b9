use async_trait::async_trait;

use crate::{
    category::domain::model::{
        commands::{
            create_category_command::CreateCategoryCommand,
            delete_category_command::DeleteCategoryCommand,
            update_category_command::UpdateCategoryCommand,
        },
        entities::category::Category,
    },
    shared::domain::model::enums::catalog_domain_error::CatalogDomainError,
};

#[async_trait]
pub trait CategoryCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CatalogDomainError>;

    async fn handle_update(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CatalogDomainError>;

    async fn handle_delete(&self, command: DeleteCategoryCommand)
    -> Result<(), CatalogDomainError>;
}
