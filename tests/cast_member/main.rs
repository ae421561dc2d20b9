mod entity_tests;
mod query_service_tests;
mod support;
