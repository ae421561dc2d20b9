use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    category::{
        domain::{
            model::{
                commands::{
                    create_category_command::CreateCategoryCommand,
                    delete_category_command::DeleteCategoryCommand,
                    update_category_command::UpdateCategoryCommand,
                },
                entities::category::{Category, CategoryCreateProps},
            },
            services::category_command_service::CategoryCommandService,
        },
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    shared::domain::model::{
        entities::entity::Entity, enums::catalog_domain_error::CatalogDomainError,
        errors::{entity_validation_error::EntityValidationError, not_found_error::NotFoundError},
    },
};

pub struct CategoryCommandServiceImpl {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CategoryCommandServiceImpl {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryCommandService for CategoryCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CatalogDomainError> {
        let category = Category::create(CategoryCreateProps {
            name: command.name().to_string(),
            description: command.description().map(str::to_string),
            is_active: command.is_active(),
        });

        if category.notification().has_errors() {
            return Err(EntityValidationError::from(category.notification()).into());
        }

        self.category_repository.insert(&category).await?;
        info!(category_id = %category.category_id(), "category created");

        Ok(category)
    }

    async fn handle_update(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CatalogDomainError> {
        let mut category = self
            .category_repository
            .find_by_id(command.category_id())
            .await?
            .ok_or_else(|| NotFoundError::new(command.category_id(), Category::NAME))?;

        if let Some(name) = command.name() {
            category.change_name(name.to_string());
        }
        if let Some(description) = command.description() {
            category.change_description(Some(description.to_string()));
        }
        match command.is_active() {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        if category.notification().has_errors() {
            return Err(EntityValidationError::from(category.notification()).into());
        }

        self.category_repository.update(&category).await?;
        Ok(category)
    }

    async fn handle_delete(
        &self,
        command: DeleteCategoryCommand,
    ) -> Result<(), CatalogDomainError> {
        self.category_repository
            .delete(command.category_id())
            .await?;
        info!(category_id = %command.category_id(), "category deleted");
        Ok(())
    }
}
