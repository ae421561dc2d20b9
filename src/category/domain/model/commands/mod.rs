pub mod create_category_command;
pub mod delete_category_command;
pub mod update_category_command;
