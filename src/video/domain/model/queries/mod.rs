pub mod get_video_query;
pub mod list_videos_query;
