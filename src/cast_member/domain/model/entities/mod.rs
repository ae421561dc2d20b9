pub mod cast_member;
