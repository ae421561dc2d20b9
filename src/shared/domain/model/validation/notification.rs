use serde::{Serialize, Serializer, ser::SerializeMap};

/// A single recorded problem: either a free-standing message or the list of
/// messages collected for one field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NotificationEntry {
    Message(String),
    Field { field: String, messages: Vec<String> },
}

impl NotificationEntry {
    pub fn field_messages(&self, field: &str) -> Option<&[String]> {
        match self {
            Self::Field {
                field: entry_field,
                messages,
            } if entry_field == field => Some(messages),
            _ => None,
        }
    }
}

impl Serialize for NotificationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(message) => serializer.serialize_str(message),
            Self::Field { field, messages } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, messages)?;
                map.end()
            }
        }
    }
}

/// Error sink attached to every entity.
///
/// Errors are only ever added; nothing clears them, so validating the same
/// entity twice records the same violation twice.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Notification {
    entries: Vec<NotificationEntry>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>, field: Option<&str>) {
        let message = message.into();
        match field {
            Some(field) => match self.field_entry_mut(field) {
                Some(messages) => messages.push(message),
                None => self.entries.push(NotificationEntry::Field {
                    field: field.to_string(),
                    messages: vec![message],
                }),
            },
            None => self.add_message(message),
        }
    }

    /// Replaces the messages of `field`, or records each message on its own
    /// when no field is given.
    pub fn set_error(&mut self, messages: Vec<String>, field: Option<&str>) {
        match field {
            Some(field) => match self.field_entry_mut(field) {
                Some(existing) => *existing = messages,
                None => self.entries.push(NotificationEntry::Field {
                    field: field.to_string(),
                    messages,
                }),
            },
            None => messages
                .into_iter()
                .for_each(|message| self.add_message(message)),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn copy_errors(&mut self, other: &Notification) {
        for entry in &other.entries {
            match entry {
                NotificationEntry::Message(message) => self.add_message(message.clone()),
                NotificationEntry::Field { field, messages } => {
                    self.set_error(messages.clone(), Some(field))
                }
            }
        }
    }

    pub fn entries(&self) -> &[NotificationEntry] {
        &self.entries
    }

    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find_map(|entry| entry.field_messages(field))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.entries).unwrap_or_default()
    }

    fn add_message(&mut self, message: String) {
        let already_recorded = self
            .entries
            .iter()
            .any(|entry| matches!(entry, NotificationEntry::Message(existing) if *existing == message));
        if !already_recorded {
            self.entries.push(NotificationEntry::Message(message));
        }
    }

    fn field_entry_mut(&mut self, field: &str) -> Option<&mut Vec<String>> {
        self.entries.iter_mut().find_map(|entry| match entry {
            NotificationEntry::Field {
                field: entry_field,
                messages,
            } if entry_field == field => Some(messages),
            _ => None,
        })
    }
}
