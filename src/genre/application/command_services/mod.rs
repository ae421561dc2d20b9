pub mod genre_command_service_impl;
