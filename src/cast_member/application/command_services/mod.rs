pub mod cast_member_command_service_impl;
