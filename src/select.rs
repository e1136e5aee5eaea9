//! Top-k index selection.
//!
//! Finds the indices of the `k` largest values of a real array, largest
//! first, in a single pass with `O(k)` scratch space. Indices are reported
//! relative to a caller-supplied lower bound `lb`, so the first element of
//! `data` is index `lb`.
//!
//! Ties keep the earlier index: a later value equal to a retained one is not
//! inserted ahead of it.

use num_traits::Float;

use crate::config::IndexBase;
use crate::error::ArrayError;
use crate::math::Array1;

/// Indices of the `k` largest values of `data`, sorted so that the
/// referenced values are non-increasing.
///
/// Requires `1 <= k <= data.len()`. Slots that no element could fill (only
/// possible when `data` holds NaN or negative infinity) hold `lb - 1`.
///
/// # Example
///
/// ```
/// use redeem_arrayops::select::max_k_indices;
///
/// let idx = max_k_indices(&[5.0, 3.0, 5.0, 1.0], 1, 2).unwrap();
/// assert_eq!(idx, vec![1, 3]);
/// ```
pub fn max_k_indices<T: Float>(data: &[T], lb: isize, k: usize) -> Result<Vec<isize>, ArrayError> {
    let unfilled = check_args(data.len(), lb, k)?;
    let mut out = vec![unfilled; k];
    select_into(data, lb, &mut out);
    Ok(out)
}

/// Same as [`max_k_indices`], using the lower bound from an [`IndexBase`].
pub fn max_k_indices_with_base<T: Float>(
    data: &[T],
    base: IndexBase,
    k: usize,
) -> Result<Vec<isize>, ArrayError> {
    max_k_indices(data, base.lower_bound(), k)
}

/// Writes the indices of the `k` largest values of `data` into `out`.
///
/// # Panics
///
/// Panics if `out.len() != k`.
pub fn max_k_indices_into<T: Float>(
    data: &[T],
    lb: isize,
    k: usize,
    out: &mut [isize],
) -> Result<(), ArrayError> {
    assert_eq!(out.len(), k, "max_k_indices_into: output buffer length must equal k");
    let unfilled = check_args(data.len(), lb, k)?;
    out.fill(unfilled);
    select_into(data, lb, out);
    Ok(())
}

/// Validates `k` and `lb` against `n` elements and returns the unfilled
/// sentinel `lb - 1`. Runs before anything sized by `k` is allocated.
fn check_args(n: usize, lb: isize, k: usize) -> Result<isize, ArrayError> {
    if k < 1 {
        log::warn!("top-k selection rejected k = {}", k);
        return Err(ArrayError::invalid_argument("k", "k must be at least 1"));
    }
    if k > n {
        log::warn!("top-k selection rejected k = {} for {} elements", k, n);
        return Err(ArrayError::invalid_argument(
            "k",
            format!("k must not exceed the array length {}, got {}", n, k),
        ));
    }
    let unfilled = lb.checked_sub(1).ok_or_else(|| {
        log::warn!("top-k selection rejected lb = {}", lb);
        ArrayError::invalid_argument("lb", format!("lb - 1 overflows isize for lb = {}", lb))
    })?;
    // n >= k >= 1 here, and slice lengths never exceed isize::MAX.
    let last = isize::try_from(n - 1)
        .ok()
        .and_then(|span| lb.checked_add(span))
        .ok_or_else(|| {
            log::warn!("top-k selection rejected lb = {} for {} elements", lb, n);
            ArrayError::invalid_argument(
                "lb",
                format!("last index lb + {} overflows isize for lb = {}", n - 1, lb),
            )
        })?;
    log::debug!("top-k selection: n = {}, k = {}, indices {}..={}", n, k, lb, last);
    Ok(unfilled)
}

/// Single-pass insertion into the sorted `out` buffer. Arguments must have
/// passed `check_args`, so every `lb + offset` fits in `isize`.
fn select_into<T: Float>(data: &[T], lb: isize, out: &mut [isize]) {
    let k = out.len();
    let mut max_vals = vec![T::neg_infinity(); k];

    for (offset, &value) in data.iter().enumerate() {
        let Some(loc) = max_vals.iter().position(|&kept| value > kept) else {
            continue;
        };
        // Drop the smallest retained entry and open a slot at `loc`.
        max_vals.copy_within(loc..k - 1, loc + 1);
        out.copy_within(loc..k - 1, loc + 1);
        max_vals[loc] = value;
        out[loc] = lb + offset as isize;
    }
}

impl<T: Float> Array1<T> {
    /// Zero-based indices of the `k` largest values, largest first.
    ///
    /// Unlike [`max_k_indices`], slots that no element could fill are
    /// dropped rather than reported as `-1`, so the result is shorter than
    /// `k` when the array holds NaN or negative infinity values.
    pub fn argmax_k(&self, k: usize) -> Result<Vec<usize>, ArrayError> {
        let idx = max_k_indices(self.as_slice(), 0, k)?;
        // Unfilled slots hold -1; they can only trail the filled ones.
        Ok(idx
            .into_iter()
            .take_while(|&i| i >= 0)
            .map(|i| i as usize)
            .collect())
    }
}
