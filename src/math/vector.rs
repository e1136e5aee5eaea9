use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, Index};
use std::slice::Iter;

/// Owned one-dimensional array. Storage is zero-based; callers that work
/// with another lower bound pass it explicitly to the routines that report
/// indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array1<U>
    where
        F: FnMut(&T) -> U,
    {
        Array1::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    /// Like `mapv`, but stops at the first element for which `f` fails.
    pub fn try_mapv<U, E, F>(&self, f: F) -> Result<Array1<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let data = self.data.iter().map(f).collect::<Result<Vec<U>, E>>()?;
        Ok(Array1::from_vec(data))
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

impl Array1<bool> {
    /// Number of `true` entries.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&flag| flag).count()
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T> From<Array1<T>> for Vec<T> {
    fn from(value: Array1<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a, 'b> BitAnd<&'b Array1<bool>> for &'a Array1<bool> {
    type Output = Array1<bool>;

    fn bitand(self, rhs: &'b Array1<bool>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Mask and requires masks of equal length"
        );
        self.iter().zip(rhs.iter()).map(|(a, b)| *a && *b).collect()
    }
}

impl<'a, 'b> BitOr<&'b Array1<bool>> for &'a Array1<bool> {
    type Output = Array1<bool>;

    fn bitor(self, rhs: &'b Array1<bool>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Mask or requires masks of equal length"
        );
        self.iter().zip(rhs.iter()).map(|(a, b)| *a || *b).collect()
    }
}
