pub mod cast_member_type;
pub mod invalid_cast_member_type_error;
