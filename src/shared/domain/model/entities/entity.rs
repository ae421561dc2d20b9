use chrono::{DateTime, Utc};

use crate::shared::domain::model::{
    validation::notification::Notification, value_objects::entity_id::EntityId,
};

/// Identity-bearing domain object with its own error sink.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: EntityId;

    /// Display name used in error messages, e.g. `"Category"`.
    const NAME: &'static str;

    fn entity_id(&self) -> &Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    fn notification(&self) -> &Notification;

    /// Re-runs the aggregate's rules for `fields` (all when `None`), appending
    /// to the notification. Returns whether the entity is valid.
    fn validate(&mut self, fields: Option<&[&str]>) -> bool;
}
