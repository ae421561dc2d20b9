use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::shared::domain::model::queries::search_params::SearchParamsInput;

/// Query string accepted by every list endpoint. Paging values stay as raw
/// text so malformed input degrades to defaults instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQueryResource {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    /// Matches `name` (or `title` for videos), case-insensitively.
    pub name: Option<String>,
    pub title: Option<String>,
    /// Cast member type code (1 = director, 2 = actor).
    #[serde(rename = "type")]
    pub cast_member_type: Option<String>,
    /// Comma-separated ids.
    pub categories_id: Option<String>,
    pub genres_id: Option<String>,
    pub cast_members_id: Option<String>,
}

impl SearchQueryResource {
    /// Builds the raw search input, keeping only the filter keys listed in
    /// `filter_keys`.
    pub fn into_search_input(self, filter_keys: &[&str]) -> SearchParamsInput {
        let mut filter = Map::new();
        let candidates = [
            ("name", self.name),
            ("title", self.title),
            ("type", self.cast_member_type),
            ("categories_id", self.categories_id),
            ("genres_id", self.genres_id),
            ("cast_members_id", self.cast_members_id),
        ];
        for (key, value) in candidates {
            if let Some(value) = value.filter(|_| filter_keys.contains(&key)) {
                filter.insert(key.to_string(), Value::String(value));
            }
        }

        SearchParamsInput {
            page: self.page.map(Value::String),
            per_page: self.per_page.map(Value::String),
            sort: self.sort.map(Value::String),
            sort_dir: self.sort_dir.map(Value::String),
            filter: (!filter.is_empty()).then_some(Value::Object(filter)),
        }
    }
}
