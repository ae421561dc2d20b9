pub mod genre_details;
pub mod get_genre_query;
pub mod list_genres_query;
