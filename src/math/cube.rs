use std::ops::Index;

use crate::math::matrix::ShapeError;

/// Owned three-dimensional array stored in row-major order (last axis
/// fastest).
#[derive(Clone, Debug, PartialEq)]
pub struct Array3<T> {
    data: Vec<T>,
    dims: (usize, usize, usize),
}

impl<T> Array3<T> {
    pub fn from_shape_vec(shape: (usize, usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (d0, d1, d2) = shape;
        if data.len() != d0 * d1 * d2 {
            return Err(ShapeError::new(&[d0, d1, d2], data.len()));
        }
        Ok(Self { data, dims: shape })
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, index: (usize, usize, usize)) -> usize {
        let (_, d1, d2) = self.dims;
        assert!(
            index.0 < self.dims.0 && index.1 < d1 && index.2 < d2,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.dims
        );
        (index.0 * d1 + index.1) * d2 + index.2
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array3<U>
    where
        F: FnMut(&T) -> U,
    {
        Array3 {
            data: self.data.iter().map(|v| f(v)).collect(),
            dims: self.dims,
        }
    }

    /// Like `mapv`, but stops at the first element for which `f` fails.
    pub fn try_mapv<U, E, F>(&self, f: F) -> Result<Array3<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        Ok(Array3 {
            data: self.data.iter().map(f).collect::<Result<Vec<U>, E>>()?,
            dims: self.dims,
        })
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize, usize)> for Array3<T> {
    type Output = T;

    fn index(&self, index: (usize, usize, usize)) -> &Self::Output {
        let offset = self.offset(index);
        &self.data[offset]
    }
}
