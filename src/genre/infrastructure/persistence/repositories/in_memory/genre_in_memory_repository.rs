use crate::{
    genre::{
        domain::model::{
            entities::genre::Genre,
            queries::list_genres_query::{GENRE_SORTABLE_FIELDS, GenreFilter},
        },
        infrastructure::persistence::repositories::genre_repository::GenreRepository,
    },
    shared::{
        domain::model::entities::entity::Entity,
        infrastructure::persistence::repositories::in_memory::in_memory_searchable_repository::{
            InMemorySearchPolicy, InMemorySearchableRepository, SortValue,
        },
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct GenreSearchPolicy;

impl InMemorySearchPolicy<Genre> for GenreSearchPolicy {
    type Filter = GenreFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        GENRE_SORTABLE_FIELDS
    }

    fn matches(&self, genre: &Genre, filter: &GenreFilter) -> bool {
        let name_matches = filter
            .name
            .as_ref()
            .is_none_or(|name| genre.name().to_lowercase().contains(&name.to_lowercase()));
        let categories_match = filter.categories_id.as_ref().is_none_or(|wanted| {
            genre
                .categories_id()
                .iter()
                .any(|category_id| wanted.contains(category_id))
        });

        name_matches && categories_match
    }

    fn sort_value(&self, genre: &Genre, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(SortValue::Text(genre.name().to_string())),
            "created_at" => Some(SortValue::Timestamp(genre.created_at())),
            _ => None,
        }
    }
}

pub type GenreInMemoryRepository = InMemorySearchableRepository<Genre, GenreSearchPolicy>;

impl GenreInMemoryRepository {
    pub fn empty() -> Self {
        Self::new(GenreSearchPolicy)
    }
}

impl GenreRepository for GenreInMemoryRepository {}
