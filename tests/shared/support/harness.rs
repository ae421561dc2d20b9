use video_catalog_api::{
    category::{
        domain::model::entities::category::Category,
        infrastructure::persistence::repositories::in_memory::category_in_memory_repository::{
            CategoryInMemoryRepository, CategorySearchPolicy,
        },
    },
    shared::infrastructure::persistence::repositories::in_memory::in_memory_searchable_repository::InMemorySearchableRepository,
};

use super::fakes::SpyCategorySearchPolicy;

pub fn spy_repository(
    items: Vec<Category>,
) -> InMemorySearchableRepository<Category, SpyCategorySearchPolicy> {
    InMemorySearchableRepository::with_items(SpyCategorySearchPolicy::default(), items)
}

pub fn standard_repository(items: Vec<Category>) -> CategoryInMemoryRepository {
    CategoryInMemoryRepository::with_items(CategorySearchPolicy, items)
}
