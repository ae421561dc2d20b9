pub mod video_in_memory_repository;
