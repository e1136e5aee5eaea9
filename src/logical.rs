//! Conversion of 0/1 numeric flag arrays to boolean arrays.
//!
//! Input values are compared exactly against 0 and 1. Anything else,
//! including values within rounding error of a flag, is rejected.

use std::fmt::Display;

use num_traits::{One, Zero};

use crate::error::ArrayError;
use crate::math::{Array1, Array2, Array3};

/// Numeric element kinds that can carry a 0/1 flag.
pub trait LogicalValue: Copy + PartialEq + Zero + One + Display {
    /// `Some(true)` for exactly one, `Some(false)` for exactly zero.
    fn to_flag(self) -> Option<bool> {
        if self == Self::one() {
            Some(true)
        } else if self == Self::zero() {
            Some(false)
        } else {
            None
        }
    }

    fn from_flag(flag: bool) -> Self {
        if flag {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl LogicalValue for f64 {}
impl LogicalValue for f32 {}
impl LogicalValue for i32 {}

/// Arrays that can be converted element-wise to a boolean array of the
/// same shape.
pub trait ToLogical {
    type Output;

    fn to_logical(&self) -> Result<Self::Output, ArrayError>;
}

/// Returns a closure that converts one element, tracking its flat offset
/// for error reporting.
fn flag_converter<T: LogicalValue>() -> impl FnMut(&T) -> Result<bool, ArrayError> {
    let mut offset = 0usize;
    move |&value| {
        let flag = value.to_flag().ok_or_else(|| ArrayError::BadLogicalValue {
            offset,
            value: value.to_string(),
        });
        offset += 1;
        flag
    }
}

impl<T: LogicalValue> ToLogical for Array1<T> {
    type Output = Array1<bool>;

    fn to_logical(&self) -> Result<Self::Output, ArrayError> {
        self.try_mapv(flag_converter())
    }
}

impl<T: LogicalValue> ToLogical for Array2<T> {
    type Output = Array2<bool>;

    fn to_logical(&self) -> Result<Self::Output, ArrayError> {
        self.try_mapv(flag_converter())
    }
}

impl<T: LogicalValue> ToLogical for Array3<T> {
    type Output = Array3<bool>;

    fn to_logical(&self) -> Result<Self::Output, ArrayError> {
        self.try_mapv(flag_converter())
    }
}

impl<T: LogicalValue> ToLogical for [T] {
    type Output = Array1<bool>;

    fn to_logical(&self) -> Result<Self::Output, ArrayError> {
        self.iter().map(flag_converter()).collect::<Result<Array1<bool>, _>>()
    }
}

/// Converts a 0/1 array of rank 1, 2 or 3 to a boolean array.
///
/// Fails with [`ArrayError::BadLogicalValue`] on the first element that is
/// not exactly 0 or 1; no partial result is returned.
pub fn to_logical<A: ToLogical + ?Sized>(a: &A) -> Result<A::Output, ArrayError> {
    let converted = a.to_logical();
    if let Err(err) = &converted {
        log::warn!("logical conversion failed: {}", err);
    }
    converted
}

impl Array1<bool> {
    /// Inverse of [`to_logical`]: `true` becomes 1 and `false` becomes 0.
    pub fn from_logical<T: LogicalValue>(&self) -> Array1<T> {
        self.mapv(|&flag| T::from_flag(flag))
    }
}

impl Array2<bool> {
    /// Inverse of [`to_logical`]: `true` becomes 1 and `false` becomes 0.
    pub fn from_logical<T: LogicalValue>(&self) -> Array2<T> {
        self.mapv(|&flag| T::from_flag(flag))
    }
}

impl Array3<bool> {
    /// Inverse of [`to_logical`]: `true` becomes 1 and `false` becomes 0.
    pub fn from_logical<T: LogicalValue>(&self) -> Array3<T> {
        self.mapv(|&flag| T::from_flag(flag))
    }
}
