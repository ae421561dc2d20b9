use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateVideoRequestResource {
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    /// One of `L`, `10`, `12`, `14`, `16`, `18`.
    pub rating: String,
    #[serde(default)]
    pub is_opened: bool,
    #[validate(length(min = 1, message = "categories_id should not be empty"))]
    pub categories_id: Vec<String>,
    #[validate(length(min = 1, message = "genres_id should not be empty"))]
    pub genres_id: Vec<String>,
    #[serde(default)]
    pub cast_members_id: Vec<String>,
}
