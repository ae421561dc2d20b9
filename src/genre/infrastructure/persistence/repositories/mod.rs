pub mod genre_repository;
pub mod in_memory;
pub mod postgres;
