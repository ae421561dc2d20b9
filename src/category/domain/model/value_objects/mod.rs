pub mod category_id;
