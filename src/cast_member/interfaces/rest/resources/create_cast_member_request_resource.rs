use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateCastMemberRequestResource {
    pub name: String,
    #[serde(rename = "type")]
    pub cast_member_type: i32,
}
