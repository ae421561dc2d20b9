use crate::{
    genre::domain::model::value_objects::genre_id::GenreId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

#[derive(Clone, Debug)]
pub struct UpdateGenreCommand {
    genre_id: GenreId,
    name: Option<String>,
    categories_id: Option<Vec<String>>,
    is_active: Option<bool>,
}

impl UpdateGenreCommand {
    pub fn new(
        genre_id: String,
        name: Option<String>,
        categories_id: Option<Vec<String>>,
        is_active: Option<bool>,
    ) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            genre_id: GenreId::new(genre_id)?,
            name,
            categories_id,
            is_active,
        })
    }

    pub fn genre_id(&self) -> &GenreId {
        &self.genre_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `Some` replaces the whole set, `None` leaves it untouched.
    pub fn categories_id(&self) -> Option<&[String]> {
        self.categories_id.as_deref()
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}
