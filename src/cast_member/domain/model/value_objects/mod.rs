pub mod cast_member_id;
