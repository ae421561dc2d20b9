use thiserror::Error;

/// Raised when an aggregate cannot be located by its identifier.
///
/// The message format is `"<EntityName> Not Found using ID <id>"`, with
/// several identifiers joined by `", "`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{entity_name} Not Found using ID {}", .ids.join(", "))]
pub struct NotFoundError {
    ids: Vec<String>,
    entity_name: &'static str,
}

impl NotFoundError {
    pub fn new(id: impl ToString, entity_name: &'static str) -> Self {
        Self {
            ids: vec![id.to_string()],
            entity_name,
        }
    }

    pub fn for_ids<I, T>(ids: I, entity_name: &'static str) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self {
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
            entity_name,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }
}
