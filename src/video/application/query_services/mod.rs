pub mod video_query_service_impl;
