use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCategoryRequestResource {
    pub name: String,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
