//! Masked compaction of one-dimensional arrays.

use crate::error::ArrayError;
use crate::math::Array1;

/// Elements of `arr` at the positions where `mask` is `true`, in their
/// original order.
///
/// `arr` and `mask` must have the same length.
pub fn pack<T: Clone>(arr: &Array1<T>, mask: &Array1<bool>) -> Result<Array1<T>, ArrayError> {
    if arr.len() != mask.len() {
        log::warn!(
            "pack: mask has {} entries but array has {}",
            mask.len(),
            arr.len()
        );
        return Err(ArrayError::LengthMismatch {
            expected: arr.len(),
            found: mask.len(),
        });
    }

    let mut packed = Vec::with_capacity(mask.count_true());
    for (value, &keep) in arr.iter().zip(mask.iter()) {
        if keep {
            packed.push(value.clone());
        }
    }
    Ok(Array1::from_vec(packed))
}

impl<T: Clone> Array1<T> {
    /// Method form of [`pack`].
    pub fn compress(&self, mask: &Array1<bool>) -> Result<Array1<T>, ArrayError> {
        pack(self, mask)
    }
}
