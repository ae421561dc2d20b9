use std::fmt;

use crate::{
    shared::domain::model::either::Either,
    video::domain::model::enums::invalid_rating_error::InvalidRatingError,
};

/// Advisory age rating. `L` is suitable for all audiences.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Rating {
    L,
    Age10,
    Age12,
    Age14,
    Age16,
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Self::L,
        Self::Age10,
        Self::Age12,
        Self::Age14,
        Self::Age16,
        Self::Age18,
    ];

    pub fn create(value: &str) -> Either<Self, InvalidRatingError> {
        Self::ALL
            .into_iter()
            .find(|rating| rating.as_str() == value)
            .map_or_else(
                || Either::Fail(InvalidRatingError::new(value)),
                Either::Ok,
            )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L => "L",
            Self::Age10 => "10",
            Self::Age12 => "12",
            Self::Age14 => "14",
            Self::Age16 => "16",
            Self::Age18 => "18",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
