pub mod cast_member_rules;
