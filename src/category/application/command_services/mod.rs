pub mod category_command_service_impl;
