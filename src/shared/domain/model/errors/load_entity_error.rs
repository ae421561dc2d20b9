use thiserror::Error;

use crate::shared::domain::model::validation::notification::{Notification, NotificationEntry};

/// Persisted state failed validation while being reconstituted.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{entity_name} could not be loaded from storage")]
pub struct LoadEntityError {
    entity_name: &'static str,
    errors: Vec<NotificationEntry>,
}

impl LoadEntityError {
    pub fn new(entity_name: &'static str, notification: &Notification) -> Self {
        Self {
            entity_name,
            errors: notification.entries().to_vec(),
        }
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    pub fn errors(&self) -> &[NotificationEntry] {
        &self.errors
    }
}
