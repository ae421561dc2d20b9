pub mod entity_validation_error;
pub mod invalid_uuid_error;
pub mod load_entity_error;
pub mod not_found_error;
pub mod search_validation_error;
