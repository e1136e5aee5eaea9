use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Error type shared by the array helpers.
#[derive(Debug)]
pub enum ArrayError {
    /// An argument is outside the range the routine accepts.
    InvalidArgument { name: &'static str, reason: String },
    /// A 0/1 flag array contained something other than 0 or 1.
    BadLogicalValue { offset: usize, value: String },
    /// Two arrays that must be the same length are not.
    LengthMismatch { expected: usize, found: usize },
    Shape(ShapeError),
}

impl ArrayError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ArrayError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{}`: {}", name, reason)
            }
            ArrayError::BadLogicalValue { offset, value } => write!(
                f,
                "bad value for logical data: {} at flat offset {}",
                value, offset
            ),
            ArrayError::LengthMismatch { expected, found } => write!(
                f,
                "length mismatch: expected {} elements, found {}",
                expected, found
            ),
            ArrayError::Shape(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArrayError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for ArrayError {
    fn from(value: ShapeError) -> Self {
        ArrayError::Shape(value)
    }
}
