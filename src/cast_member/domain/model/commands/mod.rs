pub mod create_cast_member_command;
pub mod delete_cast_member_command;
pub mod update_cast_member_command;
