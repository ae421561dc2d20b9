use std::sync::atomic::{AtomicUsize, Ordering};

use video_catalog_api::{
    category::{
        domain::model::{entities::category::Category, queries::list_categories_query::CategoryFilter},
        infrastructure::persistence::repositories::in_memory::category_in_memory_repository::CategorySearchPolicy,
    },
    shared::infrastructure::persistence::repositories::in_memory::in_memory_searchable_repository::{
        InMemorySearchPolicy, SortValue,
    },
};

/// Category policy that counts how often the filter predicate runs.
#[derive(Default)]
pub struct SpyCategorySearchPolicy {
    inner: CategorySearchPolicy,
    match_calls: AtomicUsize,
}

impl SpyCategorySearchPolicy {
    pub fn match_calls(&self) -> usize {
        self.match_calls.load(Ordering::SeqCst)
    }
}

impl InMemorySearchPolicy<Category> for SpyCategorySearchPolicy {
    type Filter = CategoryFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        self.inner.sortable_fields()
    }

    fn matches(&self, category: &Category, filter: &CategoryFilter) -> bool {
        self.match_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.matches(category, filter)
    }

    fn sort_value(&self, category: &Category, field: &str) -> Option<SortValue> {
        self.inner.sort_value(category, field)
    }
}
