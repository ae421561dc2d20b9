use crate::shared::domain::model::validation::validator_rules::{FieldRules, Rule};

pub const VIDEO_RULES: &[FieldRules] = &[
    FieldRules {
        field: "title",
        rules: &[Rule::Required, Rule::MaxLength(255)],
    },
    FieldRules {
        field: "description",
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "year_launched",
        rules: &[Rule::Required, Rule::Min(1888), Rule::Max(9999)],
    },
    FieldRules {
        field: "duration",
        rules: &[Rule::Required, Rule::Min(1)],
    },
];
