pub mod in_memory;
pub mod postgres;
pub mod searchable_repository;
pub mod unit_of_work;
