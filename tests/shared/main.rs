mod entity_id_tests;
mod in_memory_repository_tests;
mod notification_tests;
mod search_params_tests;
mod search_result_tests;
mod support;
