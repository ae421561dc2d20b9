pub mod error_response_resource;
pub mod pagination_meta_resource;
pub mod search_query_resource;
