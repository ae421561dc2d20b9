use serde_json::Value;

use crate::shared::domain::model::{
    either::Either, errors::invalid_uuid_error::InvalidUuidError,
    queries::search_params::stringify_non_empty, value_objects::entity_id::EntityId,
};

/// Reads a list of ids from a filter value: a JSON array or a
/// comma-separated string. Every malformed id is reported.
pub fn parse_id_list<I: EntityId>(value: &Value) -> Either<Vec<I>, Vec<InvalidUuidError>> {
    let raw_ids: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(stringify_non_empty).collect(),
        other => stringify_non_empty(other)
            .map(|text| {
                text.split(',')
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    };

    Either::<Vec<String>, Vec<InvalidUuidError>>::of(raw_ids)
        .chain_each(|raw| Either::from(I::parse(&raw)))
}

/// Drops repeated ids, keeping the first occurrence.
pub fn dedupe_ids<I: EntityId>(ids: impl IntoIterator<Item = I>) -> Vec<I> {
    let mut unique: Vec<I> = Vec::new();
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
