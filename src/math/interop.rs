//! Conversions between the crate arrays and `ndarray` owned arrays.
//!
//! Elements are copied in logical (row-major) order, so arrays with
//! non-standard strides on the `ndarray` side convert correctly.

use crate::math::{Array1, Array2, Array3};

impl<T: Clone> From<ndarray::Array1<T>> for Array1<T> {
    fn from(value: ndarray::Array1<T>) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> From<Array1<T>> for ndarray::Array1<T> {
    fn from(value: Array1<T>) -> Self {
        ndarray::Array1::from_vec(value.into_vec())
    }
}

impl<T: Clone> From<ndarray::Array2<T>> for Array2<T> {
    fn from(value: ndarray::Array2<T>) -> Self {
        let dim = value.dim();
        let data = value.iter().cloned().collect();
        Array2::from_shape_vec(dim, data).expect("ndarray dims always match element count")
    }
}

impl<T> From<Array2<T>> for ndarray::Array2<T> {
    fn from(value: Array2<T>) -> Self {
        let dim = value.shape();
        ndarray::Array2::from_shape_vec(dim, value.into_vec())
            .expect("Array2 dims always match element count")
    }
}

impl<T: Clone> From<ndarray::Array3<T>> for Array3<T> {
    fn from(value: ndarray::Array3<T>) -> Self {
        let dim = value.dim();
        let data = value.iter().cloned().collect();
        Array3::from_shape_vec(dim, data).expect("ndarray dims always match element count")
    }
}

impl<T> From<Array3<T>> for ndarray::Array3<T> {
    fn from(value: Array3<T>) -> Self {
        let dim = value.shape();
        ndarray::Array3::from_shape_vec(dim, value.into_vec())
            .expect("Array3 dims always match element count")
    }
}
