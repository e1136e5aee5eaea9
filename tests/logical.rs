//! Integration tests for 0/1 to boolean conversion.

use redeem_arrayops::error::ArrayError;
use redeem_arrayops::logical::{to_logical, LogicalValue, ToLogical};
use redeem_arrayops::math::{Array1, Array2, Array3};

// ---------------------------------------------------------------------------
// Rank 1
// ---------------------------------------------------------------------------

#[test]
fn converts_f64_flags() {
    let a = Array1::from_vec(vec![0.0, 1.0, 1.0, 0.0]);
    let flags = to_logical(&a).unwrap();
    assert_eq!(flags.to_vec(), vec![false, true, true, false]);
}

#[test]
fn converts_f32_and_i32_flags() {
    let a = Array1::from_vec(vec![1.0f32, 0.0]);
    assert_eq!(a.to_logical().unwrap().to_vec(), vec![true, false]);

    let b = Array1::from_vec(vec![0i32, 0, 1]);
    assert_eq!(b.to_logical().unwrap().to_vec(), vec![false, false, true]);
}

#[test]
fn converts_slices() {
    let flags = to_logical(&[1i32, 0, 1][..]).unwrap();
    assert_eq!(flags.to_vec(), vec![true, false, true]);
}

#[test]
fn rejects_value_other_than_zero_or_one() {
    let a = Array1::from_vec(vec![0.0, 2.0, 1.0]);
    let err = to_logical(&a).unwrap_err();
    match &err {
        ArrayError::BadLogicalValue { offset, value } => {
            assert_eq!(*offset, 1);
            assert_eq!(value, "2");
        }
        other => panic!("expected BadLogicalValue, got {:?}", other),
    }
    assert!(err.to_string().starts_with("bad value for logical data"));
}

#[test]
fn rejects_near_flag_values() {
    let a = Array1::from_vec(vec![1.0 + f64::EPSILON]);
    assert!(to_logical(&a).is_err());

    let b = Array1::from_vec(vec![-1i32]);
    assert!(to_logical(&b).is_err());
}

#[test]
fn rejects_nan() {
    let a = Array1::from_vec(vec![f32::NAN]);
    assert!(matches!(
        to_logical(&a),
        Err(ArrayError::BadLogicalValue { offset: 0, .. })
    ));
}

#[test]
fn empty_array_converts_to_empty() {
    let a: Array1<i32> = Array1::from_vec(vec![]);
    assert!(to_logical(&a).unwrap().is_empty());
}

#[test]
fn negative_zero_is_false() {
    assert_eq!((-0.0f64).to_flag(), Some(false));
}

// ---------------------------------------------------------------------------
// Rank 2 and 3
// ---------------------------------------------------------------------------

#[test]
fn rank2_keeps_shape() {
    let a = Array2::from_shape_vec((2, 3), vec![1.0, 0.0, 0.0, 0.0, 1.0, 1.0]).unwrap();
    let flags = to_logical(&a).unwrap();
    assert_eq!(flags.shape(), (2, 3));
    assert!(flags[(0, 0)]);
    assert!(!flags[(0, 2)]);
    assert!(flags[(1, 2)]);
}

#[test]
fn rank2_reports_flat_offset() {
    let a = Array2::from_shape_vec((2, 2), vec![1i32, 0, 0, 3]).unwrap();
    assert!(matches!(
        to_logical(&a),
        Err(ArrayError::BadLogicalValue { offset: 3, .. })
    ));
}

#[test]
fn rank3_keeps_shape() {
    let a = Array3::from_shape_vec((2, 2, 2), vec![0.0f32, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0])
        .unwrap();
    let flags = to_logical(&a).unwrap();
    assert_eq!(flags.shape(), (2, 2, 2));
    assert!(flags[(0, 0, 1)]);
    assert!(!flags[(1, 0, 0)]);
    assert!(flags[(1, 1, 1)]);
}

#[test]
fn rank3_rejects_bad_value() {
    let a = Array3::from_shape_vec((1, 2, 2), vec![0i32, 1, 7, 1]).unwrap();
    let err = to_logical(&a).unwrap_err();
    assert!(err.to_string().contains("7"));
}

// ---------------------------------------------------------------------------
// Back to numeric
// ---------------------------------------------------------------------------

#[test]
fn from_logical_restores_flags() {
    let a = Array2::from_shape_vec((2, 2), vec![0i32, 1, 1, 0]).unwrap();
    let flags = to_logical(&a).unwrap();
    let back: Array2<i32> = flags.from_logical();
    assert_eq!(back, a);
}

#[test]
fn from_logical_rank1_as_f64() {
    let flags = Array1::from_vec(vec![true, false]);
    let values: Array1<f64> = flags.from_logical();
    assert_eq!(values.to_vec(), vec![1.0, 0.0]);
}

#[test]
fn from_logical_rank3_keeps_shape() {
    let a = Array3::from_shape_vec((2, 1, 2), vec![1.0f32, 0.0, 0.0, 1.0]).unwrap();
    let flags = to_logical(&a).unwrap();
    let back: Array3<f32> = flags.from_logical();
    assert_eq!(back.shape(), (2, 1, 2));
    assert_eq!(back, a);
}
