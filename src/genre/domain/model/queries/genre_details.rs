use crate::{
    category::domain::model::entities::category::Category, genre::domain::model::entities::genre::Genre,
};

/// A genre together with its categories, in the genre's own order. Ids whose
/// category no longer exists are skipped.
#[derive(Clone, Debug)]
pub struct GenreDetails {
    pub genre: Genre,
    pub categories: Vec<Category>,
}

impl GenreDetails {
    pub fn assemble(genre: Genre, known_categories: &[Category]) -> Self {
        let categories = genre
            .categories_id()
            .iter()
            .filter_map(|category_id| {
                known_categories
                    .iter()
                    .find(|category| category.category_id() == category_id)
                    .cloned()
            })
            .collect();

        Self { genre, categories }
    }
}
