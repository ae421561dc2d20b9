use crate::{
    genre::{
        domain::model::entities::genre::Genre,
        infrastructure::persistence::repositories::genre_repository::GenreRepository,
    },
    shared::application::validations::ids_exist_in_storage_validator::IdsExistInStorageValidator,
};

pub type GenresIdExistsInStorageValidator = IdsExistInStorageValidator<Genre, dyn GenreRepository>;
