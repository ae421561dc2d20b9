use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cast_member::{
        domain::{
            model::{
                entities::cast_member::CastMember,
                queries::{
                    get_cast_member_query::GetCastMemberQuery,
                    list_cast_members_query::ListCastMembersQuery,
                },
            },
            services::cast_member_query_service::CastMemberQueryService,
        },
        infrastructure::persistence::repositories::cast_member_repository::CastMemberRepository,
    },
    shared::domain::model::{
        entities::entity::Entity, enums::catalog_domain_error::CatalogDomainError,
        errors::not_found_error::NotFoundError, queries::search_result::SearchResult,
    },
};

pub struct CastMemberQueryServiceImpl {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl CastMemberQueryServiceImpl {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl CastMemberQueryService for CastMemberQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetCastMemberQuery,
    ) -> Result<CastMember, CatalogDomainError> {
        self.cast_member_repository
            .find_by_id(query.cast_member_id())
            .await?
            .ok_or_else(|| NotFoundError::new(query.cast_member_id(), CastMember::NAME).into())
    }

    async fn handle_list(
        &self,
        query: ListCastMembersQuery,
    ) -> Result<SearchResult<CastMember>, CatalogDomainError> {
        self.cast_member_repository.search(query.params()).await
    }
}
