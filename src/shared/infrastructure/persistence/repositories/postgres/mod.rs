pub mod sqlx_search_support;
pub mod sqlx_unit_of_work_impl;
