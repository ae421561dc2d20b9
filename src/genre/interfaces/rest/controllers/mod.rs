pub mod genre_rest_controller;
