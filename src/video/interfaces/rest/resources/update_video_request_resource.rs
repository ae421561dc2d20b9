use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateVideoRequestResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year_launched: Option<i32>,
    pub duration: Option<i32>,
    pub rating: Option<String>,
    pub is_opened: Option<bool>,
    #[validate(length(min = 1, message = "categories_id should not be empty"))]
    pub categories_id: Option<Vec<String>>,
    #[validate(length(min = 1, message = "genres_id should not be empty"))]
    pub genres_id: Option<Vec<String>>,
    pub cast_members_id: Option<Vec<String>>,
}
