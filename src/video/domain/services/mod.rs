pub mod video_command_service;
pub mod video_query_service;
