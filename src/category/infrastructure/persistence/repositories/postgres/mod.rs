pub mod sqlx_category_repository_impl;
