pub mod category_rules;
