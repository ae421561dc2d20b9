use crate::{
    cast_member::{
        domain::model::entities::cast_member::CastMember,
        infrastructure::persistence::repositories::cast_member_repository::CastMemberRepository,
    },
    shared::application::validations::ids_exist_in_storage_validator::IdsExistInStorageValidator,
};

pub type CastMembersIdExistsInStorageValidator =
    IdsExistInStorageValidator<CastMember, dyn CastMemberRepository>;
