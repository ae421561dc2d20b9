pub mod create_video_command;
pub mod delete_video_command;
pub mod update_video_command;
