use crate::{
    category::domain::model::value_objects::category_id::CategoryId,
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
};

#[derive(Clone, Debug)]
pub struct GetCategoryQuery {
    category_id: CategoryId,
}

impl GetCategoryQuery {
    pub fn new(category_id: String) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            category_id: CategoryId::new(category_id)?,
        })
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }
}
