pub mod genre_in_memory_repository;
