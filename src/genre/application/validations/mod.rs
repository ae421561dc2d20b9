pub mod genres_id_exists_in_storage_validator;
