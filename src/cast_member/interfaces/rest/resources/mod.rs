pub mod cast_member_resource;
pub mod create_cast_member_request_resource;
pub mod update_cast_member_request_resource;
