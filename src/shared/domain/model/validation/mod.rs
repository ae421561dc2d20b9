pub mod notification;
pub mod validator_rules;
