use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use uuid::Uuid;

use crate::shared::domain::model::errors::invalid_uuid_error::InvalidUuidError;

const HYPHENATED_LEN: usize = uuid::fmt::Hyphenated::LENGTH;

/// UUID-backed identifier. Every aggregate gets its own nominal type so that
/// identifiers of different aggregates cannot be mixed up.
pub trait EntityId: Clone + Debug + Display + Eq + Hash + Send + Sync + 'static {
    fn from_uuid(value: Uuid) -> Self;

    fn value(&self) -> Uuid;

    /// Only the canonical hyphenated form is accepted; simple, braced and
    /// URN spellings are rejected.
    fn parse(raw: &str) -> Result<Self, InvalidUuidError> {
        if raw.len() != HYPHENATED_LEN {
            return Err(InvalidUuidError::new(raw));
        }
        Uuid::try_parse(raw)
            .map(Self::from_uuid)
            .map_err(|_| InvalidUuidError::new(raw))
    }
}
