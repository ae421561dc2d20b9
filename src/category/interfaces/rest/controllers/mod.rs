pub mod category_rest_controller;
