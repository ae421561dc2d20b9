pub mod sqlx_genre_repository_impl;
