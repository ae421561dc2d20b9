pub mod get_category_query;
pub mod list_categories_query;
