use crate::{
    cast_member::domain::model::{
        entities::cast_member::CastMember, queries::list_cast_members_query::CastMemberFilter,
    },
    shared::infrastructure::persistence::repositories::searchable_repository::SearchableRepository,
};

pub trait CastMemberRepository: SearchableRepository<CastMember, CastMemberFilter> {}
