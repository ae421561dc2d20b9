pub mod categories_id_exists_in_storage_validator;
