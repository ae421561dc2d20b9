use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateCategoryRequestResource {
    pub name: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
