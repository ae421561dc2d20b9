use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateCastMemberRequestResource {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub cast_member_type: Option<i32>,
}
