pub mod cast_member_repository;
pub mod in_memory;
pub mod postgres;
