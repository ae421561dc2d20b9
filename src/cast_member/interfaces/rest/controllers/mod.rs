pub mod cast_member_rest_controller;
