use serde_json::Value;

use crate::{
    cast_member::domain::model::enums::cast_member_type::CastMemberType,
    shared::domain::model::{
        either::Either,
        errors::search_validation_error::SearchValidationError,
        queries::search_params::{SearchParams, SearchParamsInput, stringify_non_empty},
        validation::notification::Notification,
    },
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CastMemberFilter {
    pub name: Option<String>,
    pub cast_member_type: Option<CastMemberType>,
}

impl CastMemberFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cast_member_type.is_none()
    }
}

pub type CastMemberSearchParams = SearchParams<CastMemberFilter>;

pub const CAST_MEMBER_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

#[derive(Clone, Debug, Default)]
pub struct ListCastMembersQuery {
    params: CastMemberSearchParams,
}

impl ListCastMembersQuery {
    /// Accepts `{"name": "...", "type": 1}` (either key optional). An unknown
    /// type code rejects the whole search.
    pub fn new(input: SearchParamsInput) -> Result<Self, SearchValidationError> {
        let filter = Self::build_filter(input.filter.as_ref())?;
        Ok(Self {
            params: SearchParams::with_filter(&input, filter),
        })
    }

    pub fn params(&self) -> &CastMemberSearchParams {
        &self.params
    }

    fn build_filter(
        raw: Option<&Value>,
    ) -> Result<Option<CastMemberFilter>, SearchValidationError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let (name, raw_type) = match raw {
            Value::Object(map) => (
                map.get("name").and_then(stringify_non_empty),
                map.get("type").and_then(stringify_non_empty),
            ),
            other => (stringify_non_empty(other), None),
        };

        let mut notification = Notification::new();
        let cast_member_type = match raw_type.as_deref().map(CastMemberType::parse) {
            Some(Either::Ok(cast_member_type)) => Some(cast_member_type),
            Some(Either::Fail(error)) => {
                notification.add_error(error.to_string(), Some("type"));
                None
            }
            None => None,
        };

        if notification.has_errors() {
            return Err(SearchValidationError::from(&notification));
        }

        let filter = CastMemberFilter {
            name,
            cast_member_type,
        };
        Ok((!filter.is_empty()).then_some(filter))
    }
}
