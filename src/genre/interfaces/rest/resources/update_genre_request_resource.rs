use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateGenreRequestResource {
    pub name: Option<String>,
    #[validate(length(min = 1, message = "categories_id should not be empty"))]
    pub categories_id: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
