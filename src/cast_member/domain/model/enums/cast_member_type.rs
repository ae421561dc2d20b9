use std::fmt;

use crate::{
    cast_member::domain::model::enums::invalid_cast_member_type_error::InvalidCastMemberTypeError,
    shared::domain::model::either::Either,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CastMemberType {
    Director = 1,
    Actor = 2,
}

impl CastMemberType {
    pub fn create(value: i32) -> Either<Self, InvalidCastMemberTypeError> {
        match value {
            1 => Either::Ok(Self::Director),
            2 => Either::Ok(Self::Actor),
            other => Either::Fail(InvalidCastMemberTypeError::new(other)),
        }
    }

    /// Accepts the numeric code as text, e.g. from a query string.
    pub fn parse(value: &str) -> Either<Self, InvalidCastMemberTypeError> {
        match value.trim().parse::<i32>() {
            Ok(code) => Self::create(code),
            Err(_) => Either::Fail(InvalidCastMemberTypeError::new(value)),
        }
    }

    pub fn value(&self) -> i32 {
        *self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Director => "director",
            Self::Actor => "actor",
        }
    }
}

impl fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
