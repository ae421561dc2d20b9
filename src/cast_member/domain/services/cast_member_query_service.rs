use async_trait::async_trait;

use crate::{
    cast_member::domain::model::{
        entities::cast_member::CastMember,
        queries::{
            get_cast_member_query::GetCastMemberQuery,
            list_cast_members_query::ListCastMembersQuery,
        },
    },
    shared::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, queries::search_result::SearchResult,
    },
};

#[async_trait]
pub trait CastMemberQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetCastMemberQuery,
    ) -> Result<CastMember, CatalogDomainError>;

    async fn handle_list(
        &self,
        query: ListCastMembersQuery,
    ) -> Result<SearchResult<CastMember>, CatalogDomainError>;
}
