pub mod cast_members_id_exists_in_storage_validator;
