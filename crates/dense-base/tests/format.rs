//! Integration tests for matrix text rendering.

use dense_base::math::{Array2, DenseMatrix};
use dense_base::{mat_col_str, mat_row_str, mat_str, MatrixError};

fn two_by_two() -> Array2<f64> {
    Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap()
}

// ---------------------------------------------------------------------------
// mat_str
// ---------------------------------------------------------------------------

#[test]
fn mat_str_single_matrix() {
    let x = two_by_two();
    assert_eq!(mat_str(&[&x]).unwrap(), "1\t2\n3\t4\n");
}

#[test]
fn mat_str_no_matrices_is_empty() {
    assert_eq!(mat_str::<Array2<f64>>(&[]).unwrap(), "");
}

#[test]
fn mat_str_concatenates_matrices_per_row() {
    let x = two_by_two();
    let y = Array2::from_shape_vec((2, 1), vec![0.5, -0.25]).unwrap();
    let values = vec![1e-5, 1234567.0, 100.0, 7.0, 8.0, 9.0];
    let z = Array2::from_shape_vec((2, 3), values).unwrap();
    assert_eq!(
        mat_str(&[&x, &y, &z]).unwrap(),
        "1\t2\t0.5\t1e-05\t1.234567e+06\t100\n3\t4\t-0.25\t7\t8\t9\n"
    );
}

#[test]
fn mat_str_mixes_matrix_types_through_trait_objects() {
    let x = two_by_two();
    let y = Array2::from_shape_vec((2, 1), vec![5.0, 6.0]).unwrap();
    let matrices: [&dyn DenseMatrix<Elem = f64>; 2] = [&x, &y];
    assert_eq!(mat_str(&matrices).unwrap(), "1\t2\t5\n3\t4\t6\n");
}

#[test]
fn mat_str_has_no_trailing_tab() {
    let x = two_by_two();
    let out = mat_str(&[&x, &x]).unwrap();
    for line in out.lines() {
        assert!(!line.ends_with('\t'));
        assert_eq!(line.split('\t').count(), 4);
    }
}

#[test]
fn mat_str_zero_rows_is_empty() {
    let x: Array2<f64> = Array2::zeros(0, 4);
    assert_eq!(mat_str(&[&x]).unwrap(), "");
}

#[test]
fn mat_str_zero_width_matrix_still_ends_rows() {
    let x = Array2::from_shape_vec((2, 1), vec![1.0, 2.0]).unwrap();
    let empty: Array2<f64> = Array2::zeros(2, 0);
    assert_eq!(mat_str(&[&x, &empty]).unwrap(), "1\n2\n");
    assert_eq!(mat_str(&[&empty, &x]).unwrap(), "1\n2\n");
    assert_eq!(mat_str(&[&empty]).unwrap(), "\n\n");
}

#[test]
fn mat_str_f32_values() {
    let x = Array2::from_shape_vec((1, 2), vec![0.1f32, 2.5]).unwrap();
    assert_eq!(mat_str(&[&x]).unwrap(), "0.1\t2.5\n");
}

#[test]
fn mat_str_row_count_mismatch_errors() {
    let x = two_by_two();
    let y = Array2::from_shape_vec((3, 1), vec![1.0, 2.0, 3.0]).unwrap();
    let err = mat_str(&[&x, &y]).unwrap_err();
    assert_eq!(err, MatrixError::RowCountMismatch { left: 2, right: 3 });
}

// ---------------------------------------------------------------------------
// mat_col_str / mat_row_str
// ---------------------------------------------------------------------------

#[test]
fn mat_col_str_renders_column() {
    let x = two_by_two();
    assert_eq!(mat_col_str(&x, 1), "[2, 4]");
    assert_eq!(mat_col_str(&x, 0), "[1, 3]");
}

#[test]
fn mat_row_str_renders_row() {
    let x = two_by_two();
    assert_eq!(mat_row_str(&x, 0), "[1, 2]");
    assert_eq!(mat_row_str(&x, 1), "[3, 4]");
}

#[test]
fn mat_row_str_uses_general_precision() {
    let x = Array2::from_shape_vec((1, 3), vec![0.125, 2e7, -1e-6]).unwrap();
    assert_eq!(mat_row_str(&x, 0), "[0.125, 2e+07, -1e-06]");
}

#[test]
#[should_panic(expected = "column index out of bounds")]
fn mat_col_str_out_of_bounds_panics() {
    let x = two_by_two();
    let _ = mat_col_str(&x, 2);
}

#[test]
#[should_panic(expected = "row index out of bounds")]
fn mat_row_str_out_of_bounds_panics() {
    let x = two_by_two();
    let _ = mat_row_str(&x, 2);
}
