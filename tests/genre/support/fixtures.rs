use chrono::{Duration, Utc};
use video_catalog_api::{
    category::domain::model::{entities::category::Category, value_objects::category_id::CategoryId},
    genre::domain::model::{entities::genre::Genre, value_objects::genre_id::GenreId},
};

pub const MISSING_ID: &str = "88ff2587-ce5a-4769-a8c6-1d63d29c5f7a";

pub fn category_named(name: &str) -> Category {
    Category::restore(
        CategoryId::new_random(),
        name.to_string(),
        None,
        true,
        Utc::now() - Duration::minutes(10),
    )
}

pub fn genre_with_categories(name: &str, categories: &[&Category], minutes_ago: i64) -> Genre {
    Genre::restore(
        GenreId::new_random(),
        name.to_string(),
        categories.iter().map(|category| *category.category_id()).collect(),
        true,
        Utc::now() - Duration::minutes(minutes_ago),
    )
}
