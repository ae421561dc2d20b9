use crate::{
    category::domain::model::value_objects::category_id::CategoryId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

#[derive(Clone, Debug)]
pub struct DeleteCategoryCommand {
    category_id: CategoryId,
}

impl DeleteCategoryCommand {
    pub fn new(category_id: String) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            category_id: CategoryId::new(category_id)?,
        })
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }
}
