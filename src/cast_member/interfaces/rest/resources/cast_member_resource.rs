use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    cast_member::domain::model::entities::cast_member::CastMember,
    shared::{
        domain::model::{entities::entity::Entity, queries::search_result::SearchResult},
        interfaces::rest::resources::pagination_meta_resource::PaginationMetaResource,
    },
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CastMemberResource {
    pub id: String,
    pub name: String,
    /// 1 = director, 2 = actor.
    #[serde(rename = "type")]
    pub cast_member_type: i32,
    pub created_at: String,
}

impl From<&CastMember> for CastMemberResource {
    fn from(cast_member: &CastMember) -> Self {
        Self {
            id: cast_member.cast_member_id().to_string(),
            name: cast_member.name().to_string(),
            cast_member_type: cast_member.cast_member_type().value(),
            created_at: cast_member.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CastMemberCollectionResource {
    pub data: Vec<CastMemberResource>,
    pub meta: PaginationMetaResource,
}

impl From<SearchResult<CastMember>> for CastMemberCollectionResource {
    fn from(result: SearchResult<CastMember>) -> Self {
        Self {
            meta: PaginationMetaResource::from(&result),
            data: result.items().iter().map(CastMemberResource::from).collect(),
        }
    }
}
