pub mod invalid_rating_error;
pub mod rating;
