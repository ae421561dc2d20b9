use crate::shared::domain::model::validation::validator_rules::{FieldRules, Rule};

pub const GENRE_RULES: &[FieldRules] = &[FieldRules {
    field: "name",
    rules: &[Rule::Required, Rule::MaxLength(255)],
}];
