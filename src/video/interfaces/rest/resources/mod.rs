pub mod create_video_request_resource;
pub mod update_video_request_resource;
pub mod video_resource;
