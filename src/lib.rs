//! redeem-arrayops: small numeric array helpers.
//!
//! This crate provides top-k index selection over real arrays, conversion of
//! 0/1 flag arrays to booleans, transposed copies of 2D arrays and masked
//! packing of 1D arrays. Every routine returns a newly allocated value and
//! reports bad input through [`error::ArrayError`] rather than aborting.
//!
//! The array containers in [`math`] are intentionally small; conversions to
//! and from `ndarray` are provided for callers that already use it.
pub mod compact;
pub mod config;
pub mod error;
pub mod logical;
pub mod math;
pub mod select;

pub use compact::pack;
pub use config::IndexBase;
pub use error::ArrayError;
pub use logical::{to_logical, LogicalValue, ToLogical};
pub use math::{transpose, Array1, Array2, Array3, ShapeError};
pub use select::{max_k_indices, max_k_indices_into, max_k_indices_with_base};
