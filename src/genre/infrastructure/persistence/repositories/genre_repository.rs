use crate::{
    genre::domain::model::{entities::genre::Genre, queries::list_genres_query::GenreFilter},
    shared::infrastructure::persistence::repositories::searchable_repository::SearchableRepository,
};

pub trait GenreRepository: SearchableRepository<Genre, GenreFilter> {}
