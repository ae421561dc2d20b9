use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    cast_member::{
        domain::{
            model::{
                commands::{
                    create_cast_member_command::CreateCastMemberCommand,
                    delete_cast_member_command::DeleteCastMemberCommand,
                    update_cast_member_command::UpdateCastMemberCommand,
                },
                entities::cast_member::{CastMember, CastMemberCreateProps},
                enums::{
                    cast_member_type::CastMemberType,
                    invalid_cast_member_type_error::InvalidCastMemberTypeError,
                },
            },
            services::cast_member_command_service::CastMemberCommandService,
        },
        infrastructure::persistence::repositories::cast_member_repository::CastMemberRepository,
    },
    shared::domain::model::{
        either::Either,
        entities::entity::Entity,
        enums::catalog_domain_error::CatalogDomainError,
        errors::{entity_validation_error::EntityValidationError, not_found_error::NotFoundError},
        validation::notification::Notification,
    },
};

pub struct CastMemberCommandServiceImpl {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl CastMemberCommandServiceImpl {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

fn invalid_type(error: InvalidCastMemberTypeError) -> CatalogDomainError {
    let mut notification = Notification::new();
    notification.add_error(error.to_string(), Some("type"));
    EntityValidationError::from(&notification).into()
}

#[async_trait]
impl CastMemberCommandService for CastMemberCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateCastMemberCommand,
    ) -> Result<CastMember, CatalogDomainError> {
        let cast_member_type = match CastMemberType::create(command.cast_member_type()) {
            Either::Ok(cast_member_type) => cast_member_type,
            Either::Fail(error) => return Err(invalid_type(error)),
        };

        let cast_member = CastMember::create(CastMemberCreateProps {
            name: command.name().to_string(),
            cast_member_type,
        });
        if cast_member.notification().has_errors() {
            return Err(EntityValidationError::from(cast_member.notification()).into());
        }

        self.cast_member_repository.insert(&cast_member).await?;
        info!(cast_member_id = %cast_member.cast_member_id(), "cast member created");

        Ok(cast_member)
    }

    async fn handle_update(
        &self,
        command: UpdateCastMemberCommand,
    ) -> Result<CastMember, CatalogDomainError> {
        let mut cast_member = self
            .cast_member_repository
            .find_by_id(command.cast_member_id())
            .await?
            .ok_or_else(|| NotFoundError::new(command.cast_member_id(), CastMember::NAME))?;

        if let Some(name) = command.name() {
            cast_member.change_name(name.to_string());
        }
        if let Some(raw_type) = command.cast_member_type() {
            match CastMemberType::create(raw_type) {
                Either::Ok(cast_member_type) => cast_member.change_type(cast_member_type),
                Either::Fail(error) => cast_member
                    .notification_mut()
                    .add_error(error.to_string(), Some("type")),
            }
        }

        if cast_member.notification().has_errors() {
            return Err(EntityValidationError::from(cast_member.notification()).into());
        }

        self.cast_member_repository.update(&cast_member).await?;
        Ok(cast_member)
    }

    async fn handle_delete(
        &self,
        command: DeleteCastMemberCommand,
    ) -> Result<(), CatalogDomainError> {
        self.cast_member_repository
            .delete(command.cast_member_id())
            .await?;
        info!(cast_member_id = %command.cast_member_id(), "cast member deleted");
        Ok(())
    }
}
