pub mod sqlx_cast_member_repository_impl;
