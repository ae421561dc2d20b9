pub mod create_genre_request_resource;
pub mod genre_resource;
pub mod update_genre_request_resource;
