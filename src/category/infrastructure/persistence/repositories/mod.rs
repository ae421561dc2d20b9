pub mod category_repository;
pub mod in_memory;
pub mod postgres;
