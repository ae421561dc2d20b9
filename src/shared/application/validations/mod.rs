pub mod ids_exist_in_storage_validator;
