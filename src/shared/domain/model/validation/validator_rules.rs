//! Declarative field rules shared by every aggregate.
//!
//! Each aggregate declares a static table of [`FieldRules`] and exposes its
//! current values through [`FieldSource`]. [`validate_fields`] walks the table
//! and appends one message per violated rule to the entity's notification.

use crate::shared::domain::model::validation::notification::Notification;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(i64),
    Max(i64),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i64>),
    List(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

pub trait FieldSource {
    fn field_value(&self, field: &str) -> FieldValue;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleViolation {
    pub field: &'static str,
    pub message: String,
}

/// Evaluates `table` against `source`, restricted to `fields` when given.
pub fn evaluate<S: FieldSource + ?Sized>(
    table: &[FieldRules],
    source: &S,
    fields: Option<&[&str]>,
) -> Vec<RuleViolation> {
    table
        .iter()
        .filter(|group| fields.is_none_or(|selected| selected.contains(&group.field)))
        .flat_map(|group| {
            let value = source.field_value(group.field);
            group
                .rules
                .iter()
                .filter_map(move |rule| check(group.field, *rule, &value))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Runs the rules and records violations. Returns `true` when the
/// notification holds no errors afterwards.
pub fn validate_fields<S: FieldSource + ?Sized>(
    table: &[FieldRules],
    source: &S,
    fields: Option<&[&str]>,
    notification: &mut Notification,
) -> bool {
    for violation in evaluate(table, source, fields) {
        notification.add_error(violation.message, Some(violation.field));
    }
    !notification.has_errors()
}

fn check(field: &'static str, rule: Rule, value: &FieldValue) -> Option<RuleViolation> {
    let message = match (rule, value) {
        (Rule::Required, FieldValue::Text(text)) if text.as_deref().is_none_or(str::is_empty) => {
            format!("{field} should not be empty")
        }
        (Rule::Required, FieldValue::Integer(None)) => format!("{field} should not be empty"),
        (Rule::Required, FieldValue::List(0)) => format!("{field} should not be empty"),
        (Rule::MinLength(min), FieldValue::Text(Some(text))) if text.chars().count() < min => {
            format!("{field} must be longer than or equal to {min} characters")
        }
        (Rule::MaxLength(max), FieldValue::Text(Some(text))) if text.chars().count() > max => {
            format!("{field} must be shorter than or equal to {max} characters")
        }
        (Rule::Min(min), FieldValue::Integer(Some(number))) if *number < min => {
            format!("{field} must not be less than {min}")
        }
        (Rule::Max(max), FieldValue::Integer(Some(number))) if *number > max => {
            format!("{field} must not be greater than {max}")
        }
        _ => return None,
    };

    Some(RuleViolation { field, message })
}
