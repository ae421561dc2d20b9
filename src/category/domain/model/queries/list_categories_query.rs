use crate::shared::domain::model::queries::search_params::{SearchParams, SearchParamsInput};

/// Categories are filtered by a case-insensitive substring of their name.
pub type CategoryFilter = String;

pub type CategorySearchParams = SearchParams<CategoryFilter>;

pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

#[derive(Clone, Debug, Default)]
pub struct ListCategoriesQuery {
    params: CategorySearchParams,
}

impl ListCategoriesQuery {
    /// The filter may be given as a plain string or as `{"name": "..."}`.
    pub fn new(mut input: SearchParamsInput) -> Self {
        if let Some(serde_json::Value::Object(filter)) = &input.filter {
            input.filter = filter.get("name").cloned();
        }

        Self {
            params: SearchParams::create(input),
        }
    }

    pub fn params(&self) -> &CategorySearchParams {
        &self.params
    }
}
