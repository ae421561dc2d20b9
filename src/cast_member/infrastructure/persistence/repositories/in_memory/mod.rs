pub mod cast_member_in_memory_repository;
