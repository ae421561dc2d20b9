use chrono::{DateTime, Duration, Utc};
use video_catalog_api::cast_member::domain::model::{
    entities::cast_member::CastMember, enums::cast_member_type::CastMemberType,
    value_objects::cast_member_id::CastMemberId,
};

pub const MISSING_ID: &str = "88ff2587-ce5a-4769-a8c6-1d63d29c5f7a";

pub fn cast_member_at(
    name: &str,
    cast_member_type: CastMemberType,
    created_at: DateTime<Utc>,
) -> CastMember {
    CastMember::restore(
        CastMemberId::new_random(),
        name.to_string(),
        cast_member_type,
        created_at,
    )
}

pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}
