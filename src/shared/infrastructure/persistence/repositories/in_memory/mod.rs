pub mod in_memory_searchable_repository;
pub mod in_memory_unit_of_work;
