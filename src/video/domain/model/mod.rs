pub mod commands;
pub mod entities;
pub mod enums;
pub mod queries;
pub mod validators;
pub mod value_objects;
