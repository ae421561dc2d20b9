use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("The rating must be one of the following values: L, 10, 12, 14, 16, 18, passed value: {value}")]
pub struct InvalidRatingError {
    value: String,
}

impl InvalidRatingError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
