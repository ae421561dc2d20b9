pub mod category_query_service_impl;
