pub mod sqlx_video_repository_impl;
