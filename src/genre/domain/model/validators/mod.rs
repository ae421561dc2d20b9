pub mod genre_rules;
