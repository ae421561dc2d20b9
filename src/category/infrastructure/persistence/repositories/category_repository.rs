use crate::{
    category::domain::model::{
        entities::category::Category, queries::list_categories_query::CategoryFilter,
    },
    shared::infrastructure::persistence::repositories::searchable_repository::SearchableRepository,
};

pub trait CategoryRepository: SearchableRepository<Category, CategoryFilter> {}
