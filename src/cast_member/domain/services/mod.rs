pub mod cast_member_command_service;
pub mod cast_member_query_service;
