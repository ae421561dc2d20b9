pub mod cast_member_query_service_impl;
