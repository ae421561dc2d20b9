pub mod error_mapping;
pub mod resources;
