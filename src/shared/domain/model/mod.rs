pub mod either;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod queries;
pub mod validation;
pub mod value_objects;
