pub mod cast_member;
pub mod category;
pub mod config;
pub mod genre;
pub mod shared;
pub mod video;
