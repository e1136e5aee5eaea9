use std::error::Error;
use std::fmt;
use std::ops::Index;

/// Owned two-dimensional array stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::new(&[rows, cols], data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
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
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Like `mapv`, but stops at the first element for which `f` fails.
    pub fn try_mapv<U, E, F>(&self, f: F) -> Result<Array2<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        Ok(Array2 {
            data: self.data.iter().map(f).collect::<Result<Vec<U>, E>>()?,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Returns a newly allocated `(ncols, nrows)` array with
    /// `out[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Array2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Array2 {
            data,
            rows: self.cols,
            cols: self.rows,
        }
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

/// Transposed copy of `a`; see [`Array2::transpose`].
pub fn transpose<T: Clone>(a: &Array2<T>) -> Array2<T> {
    a.transpose()
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

/// A buffer length that does not match the requested shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    dims: Vec<usize>,
    len: usize,
}

impl ShapeError {
    pub(crate) fn new(dims: &[usize], len: usize) -> Self {
        Self {
            dims: dims.to_vec(),
            len,
        }
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self
            .dims
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "invalid shape ({}) for buffer of length {}", dims, self.len)
    }
}

impl Error for ShapeError {}
