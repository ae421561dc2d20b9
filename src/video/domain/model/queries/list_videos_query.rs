use serde_json::{Map, Value};

use crate::{
    cast_member::domain::model::value_objects::cast_member_id::CastMemberId,
    category::domain::model::value_objects::category_id::CategoryId,
    genre::domain::model::value_objects::genre_id::GenreId,
    shared::domain::model::{
        either::Either,
        errors::search_validation_error::SearchValidationError,
        queries::{
            id_list_filter::parse_id_list,
            search_params::{SearchParams, SearchParamsInput, stringify_non_empty},
        },
        validation::notification::Notification,
        value_objects::entity_id::EntityId,
    },
};

/// Every relation criterion matches videos linked to any of its ids; the
/// criteria themselves are combined with AND.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VideoFilter {
    pub title: Option<String>,
    pub categories_id: Option<Vec<CategoryId>>,
    pub genres_id: Option<Vec<GenreId>>,
    pub cast_members_id: Option<Vec<CastMemberId>>,
}

impl VideoFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.categories_id.is_none()
            && self.genres_id.is_none()
            && self.cast_members_id.is_none()
    }
}

pub type VideoSearchParams = SearchParams<VideoFilter>;

pub const VIDEO_SORTABLE_FIELDS: &[&str] = &["title", "created_at"];

#[derive(Clone, Debug, Default)]
pub struct ListVideosQuery {
    params: VideoSearchParams,
}

impl ListVideosQuery {
    pub fn new(input: SearchParamsInput) -> Result<Self, SearchValidationError> {
        let filter = Self::build_filter(input.filter.as_ref())?;
        Ok(Self {
            params: SearchParams::with_filter(&input, filter),
        })
    }

    pub fn params(&self) -> &VideoSearchParams {
        &self.params
    }

    fn build_filter(raw: Option<&Value>) -> Result<Option<VideoFilter>, SearchValidationError> {
        let empty = Map::new();
        let (title, map) = match raw {
            None => return Ok(None),
            Some(Value::Object(map)) => (map.get("title").and_then(stringify_non_empty), map),
            Some(other) => (stringify_non_empty(other), &empty),
        };

        let mut notification = Notification::new();
        let filter = VideoFilter {
            title,
            categories_id: id_criterion(map, "categories_id", &mut notification),
            genres_id: id_criterion(map, "genres_id", &mut notification),
            cast_members_id: id_criterion(map, "cast_members_id", &mut notification),
        };

        if notification.has_errors() {
            return Err(SearchValidationError::from(&notification));
        }
        Ok((!filter.is_empty()).then_some(filter))
    }
}

fn id_criterion<I: EntityId>(
    map: &Map<String, Value>,
    field: &str,
    notification: &mut Notification,
) -> Option<Vec<I>> {
    match map.get(field).map(parse_id_list::<I>) {
        Some(Either::Ok(ids)) if !ids.is_empty() => Some(ids),
        Some(Either::Fail(errors)) => {
            for error in errors {
                notification.add_error(error.to_string(), Some(field));
            }
            None
        }
        _ => None,
    }
}
