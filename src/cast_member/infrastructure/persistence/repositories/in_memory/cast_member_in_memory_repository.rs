use crate::{
    cast_member::{
        domain::model::{
            entities::cast_member::CastMember,
            queries::list_cast_members_query::{CAST_MEMBER_SORTABLE_FIELDS, CastMemberFilter},
        },
        infrastructure::persistence::repositories::cast_member_repository::CastMemberRepository,
    },
    shared::{
        domain::model::entities::entity::Entity,
        infrastructure::persistence::repositories::in_memory::in_memory_searchable_repository::{
            InMemorySearchPolicy, InMemorySearchableRepository, SortValue,
        },
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct CastMemberSearchPolicy;

impl InMemorySearchPolicy<CastMember> for CastMemberSearchPolicy {
    type Filter = CastMemberFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        CAST_MEMBER_SORTABLE_FIELDS
    }

    fn matches(&self, cast_member: &CastMember, filter: &CastMemberFilter) -> bool {
        let name_matches = filter.name.as_ref().is_none_or(|name| {
            cast_member
                .name()
                .to_lowercase()
                .contains(&name.to_lowercase())
        });
        let type_matches = filter
            .cast_member_type
            .is_none_or(|cast_member_type| cast_member.cast_member_type() == cast_member_type);

        name_matches && type_matches
    }

    fn sort_value(&self, cast_member: &CastMember, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(SortValue::Text(cast_member.name().to_string())),
            "created_at" => Some(SortValue::Timestamp(cast_member.created_at())),
            _ => None,
        }
    }
}

pub type CastMemberInMemoryRepository =
    InMemorySearchableRepository<CastMember, CastMemberSearchPolicy>;

impl CastMemberInMemoryRepository {
    pub fn empty() -> Self {
        Self::new(CastMemberSearchPolicy)
    }
}

impl CastMemberRepository for CastMemberInMemoryRepository {}
