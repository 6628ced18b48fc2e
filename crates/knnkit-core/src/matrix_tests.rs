//! Tests for the matrix module.

use super::error::Error;
use super::matrix::{Matrix, Vector};

#[test]
fn test_new_checks_shape() {
    let matrix = Matrix::new(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid shape");
    assert_eq!(matrix.shape(), (2, 3));
    assert_eq!(matrix.row(1), &[4.0, 5.0, 6.0]);

    let err = Matrix::new(2, 3, vec![1.0_f32; 5]).unwrap_err();
    assert!(matches!(
        err,
        Error::Shape {
            expected: 6,
            actual: 5
        }
    ));
}

#[test]
fn test_from_rows_rejects_ragged_rows() {
    let err = Matrix::from_rows(vec![vec![1.0_f64, 2.0], vec![3.0]]).unwrap_err();
    assert!(matches!(
        err,
        Error::Shape {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn test_from_rows_preserves_order() {
    let matrix = Matrix::from_rows(vec![vec![1.0_f64, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("equal rows");
    let rows: Vec<&[f64]> = matrix.rows_iter().collect();
    assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);
    assert_eq!(matrix.as_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_empty_and_zero_width_matrices() {
    let empty = Matrix::<f32>::from_rows(Vec::new()).expect("no rows");
    assert!(empty.is_empty());
    assert_eq!(empty.shape(), (0, 0));

    let zero_width = Matrix::<f32>::new(3, 0, Vec::new()).expect("zero columns");
    assert_eq!(zero_width.shape(), (3, 0));
    assert!(zero_width.row(2).is_empty());
}

#[test]
#[should_panic(expected = "out of range")]
fn test_row_out_of_range_panics() {
    let matrix = Matrix::new(1, 2, vec![1.0_f32, 2.0]).expect("valid shape");
    let _ = matrix.row(1);
}

#[test]
fn test_vector_derefs_to_slice() {
    let vector: Vector<f32> = vec![1.0, 2.0, 3.0].into();
    assert_eq!(vector.len(), 3);
    assert_eq!(&vector[..2], &[1.0, 2.0]);

    let collected: Vector<f64> = (0_i32..4).map(f64::from).collect();
    assert_eq!(collected.into_inner(), vec![0.0, 1.0, 2.0, 3.0]);
}
