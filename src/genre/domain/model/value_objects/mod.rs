pub mod genre_id;
