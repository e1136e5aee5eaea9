//! Small owned array types used by the helpers in this crate.
//!
//! Provides `Array1` (1D), `Array2` (2D) and `Array3` (3D) containers with
//! minimal convenience methods, plus conversions to and from `ndarray` in
//! [`interop`]. Multi-dimensional types are row-major.
pub mod cube;
pub mod interop;
pub mod matrix;
pub mod vector;

pub use cube::Array3;
pub use matrix::{transpose, Array2, ShapeError};
pub use vector::Array1;
