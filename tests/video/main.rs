mod command_service_tests;
mod entity_tests;
mod support;
