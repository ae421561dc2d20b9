use crate::{
    category::domain::model::value_objects::category_id::CategoryId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

/// Partial update: only the fields that are `Some` are applied.
#[derive(Clone, Debug)]
pub struct UpdateCategoryCommand {
    category_id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    is_active: Option<bool>,
}

impl UpdateCategoryCommand {
    pub fn new(
        category_id: String,
        name: Option<String>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            category_id: CategoryId::new(category_id)?,
            name,
            description,
            is_active,
        })
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}
