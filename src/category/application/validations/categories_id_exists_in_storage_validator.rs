use crate::{
    category::{
        domain::model::entities::category::Category,
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    shared::application::validations::ids_exist_in_storage_validator::IdsExistInStorageValidator,
};

pub type CategoriesIdExistsInStorageValidator =
    IdsExistInStorageValidator<Category, dyn CategoryRepository>;
