use std::fmt;

use uuid::Uuid;

use crate::shared::domain::model::{
    errors::invalid_uuid_error::InvalidUuidError, value_objects::entity_id::EntityId,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn new(value: String) -> Result<Self, InvalidUuidError> {
        Self::parse(&value)
    }

    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl EntityId for CategoryId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
