use crate::{
    category::{
        domain::model::{
            entities::category::Category,
            queries::list_categories_query::{CATEGORY_SORTABLE_FIELDS, CategoryFilter},
        },
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    shared::{
        domain::model::entities::entity::Entity,
        infrastructure::persistence::repositories::in_memory::in_memory_searchable_repository::{
            InMemorySearchPolicy, InMemorySearchableRepository, SortValue,
        },
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct CategorySearchPolicy;

impl InMemorySearchPolicy<Category> for CategorySearchPolicy {
    type Filter = CategoryFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        CATEGORY_SORTABLE_FIELDS
    }

    fn matches(&self, category: &Category, filter: &CategoryFilter) -> bool {
        category
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    fn sort_value(&self, category: &Category, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(SortValue::Text(category.name().to_string())),
            "created_at" => Some(SortValue::Timestamp(category.created_at())),
            _ => None,
        }
    }
}

pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchPolicy>;

impl CategoryInMemoryRepository {
    pub fn empty() -> Self {
        Self::new(CategorySearchPolicy)
    }
}

impl CategoryRepository for CategoryInMemoryRepository {}
