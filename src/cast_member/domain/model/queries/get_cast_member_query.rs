use crate::{
    cast_member::domain::model::value_objects::cast_member_id::CastMemberId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

#[derive(Clone, Debug)]
pub struct GetCastMemberQuery {
    cast_member_id: CastMemberId,
}

impl GetCastMemberQuery {
    pub fn new(cast_member_id: String) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            cast_member_id: CastMemberId::new(cast_member_id)?,
        })
    }

    pub fn cast_member_id(&self) -> &CastMemberId {
        &self.cast_member_id
    }
}
