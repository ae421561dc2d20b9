use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateGenreRequestResource {
    pub name: String,
    #[validate(length(min = 1, message = "categories_id should not be empty"))]
    pub categories_id: Vec<String>,
    pub is_active: Option<bool>,
}
