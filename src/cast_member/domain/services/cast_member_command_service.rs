use async_trait::async_trait;

use crate::{
    cast_member::domain::model::{
        commands::{
            create_cast_member_command::CreateCastMemberCommand,
            delete_cast_member_command::DeleteCastMemberCommand,
            update_cast_member_command::UpdateCastMemberCommand,
        },
        entities::cast_member::CastMember,
    },
    shared::domain::model::enums::catalog_domain_error::CatalogDomainError,
};

#[async_trait]
pub trait CastMemberCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateCastMemberCommand,
    ) -> Result<CastMember, CatalogDomainError>;

    async fn handle_update(
        &self,
        command: UpdateCastMemberCommand,
    ) -> Result<CastMember, CatalogDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteCastMemberCommand,
    ) -> Result<(), CatalogDomainError>;
}
