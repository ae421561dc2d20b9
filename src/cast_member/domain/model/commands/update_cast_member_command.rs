use crate::{
    cast_member::domain::model::value_objects::cast_member_id::CastMemberId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

#[derive(Clone, Debug)]
pub struct UpdateCastMemberCommand {
    cast_member_id: CastMemberId,
    name: Option<String>,
    cast_member_type: Option<i32>,
}

impl UpdateCastMemberCommand {
    pub fn new(
        cast_member_id: String,
        name: Option<String>,
        cast_member_type: Option<i32>,
    ) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            cast_member_id: CastMemberId::new(cast_member_id)?,
            name,
            cast_member_type,
        })
    }

    pub fn cast_member_id(&self) -> &CastMemberId {
        &self.cast_member_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn cast_member_type(&self) -> Option<i32> {
        self.cast_member_type
    }
}
