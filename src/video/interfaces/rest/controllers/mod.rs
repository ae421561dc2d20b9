pub mod video_rest_controller;
