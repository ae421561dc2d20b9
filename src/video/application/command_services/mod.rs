pub mod video_command_service_impl;
