use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Invalid cast member type: {value}")]
pub struct InvalidCastMemberTypeError {
    value: String,
}

impl InvalidCastMemberTypeError {
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
