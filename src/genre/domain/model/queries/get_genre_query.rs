use crate::{
    genre::domain::model::value_objects::genre_id::GenreId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

#[derive(Clone, Debug)]
pub struct GetGenreQuery {
    genre_id: GenreId,
}

impl GetGenreQuery {
    pub fn new(genre_id: String) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            genre_id: GenreId::new(genre_id)?,
        })
    }

    pub fn genre_id(&self) -> &GenreId {
        &self.genre_id
    }
}
