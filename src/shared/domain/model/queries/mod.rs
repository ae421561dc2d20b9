pub mod id_list_filter;
pub mod search_params;
pub mod search_result;
