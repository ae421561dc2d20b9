pub mod category_in_memory_repository;
