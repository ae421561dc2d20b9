use serde_json::Value;

use crate::{
    category::domain::model::value_objects::category_id::CategoryId,
    shared::domain::model::{
        either::Either,
        errors::search_validation_error::SearchValidationError,
        queries::{
            id_list_filter::parse_id_list,
            search_params::{SearchParams, SearchParamsInput, stringify_non_empty},
        },
        validation::notification::Notification,
    },
};

/// `categories_id` matches genres linked to any of the given categories.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenreFilter {
    pub name: Option<String>,
    pub categories_id: Option<Vec<CategoryId>>,
}

impl GenreFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.categories_id.is_none()
    }
}

pub type GenreSearchParams = SearchParams<GenreFilter>;

pub const GENRE_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

#[derive(Clone, Debug, Default)]
pub struct ListGenresQuery {
    params: GenreSearchParams,
}

impl ListGenresQuery {
    pub fn new(input: SearchParamsInput) -> Result<Self, SearchValidationError> {
        let filter = Self::build_filter(input.filter.as_ref())?;
        Ok(Self {
            params: SearchParams::with_filter(&input, filter),
        })
    }

    pub fn params(&self) -> &GenreSearchParams {
        &self.params
    }

    fn build_filter(raw: Option<&Value>) -> Result<Option<GenreFilter>, SearchValidationError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let (name, raw_categories) = match raw {
            Value::Object(map) => (
                map.get("name").and_then(stringify_non_empty),
                map.get("categories_id"),
            ),
            other => (stringify_non_empty(other), None),
        };

        let mut notification = Notification::new();
        let categories_id = match raw_categories.map(parse_id_list::<CategoryId>) {
            Some(Either::Ok(ids)) if !ids.is_empty() => Some(ids),
            Some(Either::Fail(errors)) => {
                for error in errors {
                    notification.add_error(
                        error.to_string(),
                        Some("categories_id"),
                    );
                }
                None
            }
            _ => None,
        };

        if notification.has_errors() {
            return Err(SearchValidationError::from(&notification));
        }

        let filter = GenreFilter {
            name,
            categories_id,
        };
        Ok((!filter.is_empty()).then_some(filter))
    }
}
