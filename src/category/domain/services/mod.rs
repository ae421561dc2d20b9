pub mod category_command_service;
pub mod category_query_service;
