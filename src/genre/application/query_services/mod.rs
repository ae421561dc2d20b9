pub mod genre_query_service_impl;
