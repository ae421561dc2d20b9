pub mod genre_command_service;
pub mod genre_query_service;
