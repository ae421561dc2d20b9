pub mod get_cast_member_query;
pub mod list_cast_members_query;
