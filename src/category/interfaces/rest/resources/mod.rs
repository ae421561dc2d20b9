pub mod category_resource;
pub mod create_category_request_resource;
pub mod update_category_request_resource;
