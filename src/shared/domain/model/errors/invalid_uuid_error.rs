use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("ID must be a valid UUID: {value}")]
pub struct InvalidUuidError {
    value: String,
}

impl InvalidUuidError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
