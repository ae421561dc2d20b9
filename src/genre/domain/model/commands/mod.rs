pub mod create_genre_command;
pub mod delete_genre_command;
pub mod update_genre_command;
