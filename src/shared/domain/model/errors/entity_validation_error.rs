use thiserror::Error;

use crate::shared::domain::model::validation::notification::{Notification, NotificationEntry};

/// Invalid caller input, carrying every violation collected by a
/// [`Notification`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Entity Validation Error")]
pub struct EntityValidationError {
    errors: Vec<NotificationEntry>,
}

impl EntityValidationError {
    pub fn new(errors: Vec<NotificationEntry>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[NotificationEntry] {
        &self.errors
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.iter().find_map(|entry| entry.field_messages(field))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.errors).unwrap_or_default()
    }
}

impl From<&Notification> for EntityValidationError {
    fn from(notification: &Notification) -> Self {
        Self::new(notification.entries().to_vec())
    }
}
