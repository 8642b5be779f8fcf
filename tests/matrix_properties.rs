use rust_tabular_ml::index::{Locator, SliceRange};
use rust_tabular_ml::matrix::{Matrix, Selection};
use rust_tabular_ml::DataError;

fn sequential(rows: usize, cols: usize) -> Matrix {
    Matrix::from_vec(rows, cols, (0..rows * cols).map(|v| v as f64 * 0.5 - 3.0).collect()).unwrap()
}

#[test]
fn new_matrix_is_zero_filled() {
    let m = Matrix::new(3, 4).unwrap();
    assert_eq!(m.shape(), (3, 4));
    assert!(m.as_slice().iter().all(|&v| v == 0.0));

    assert!(matches!(Matrix::new(-1, 2), Err(DataError::InvalidArgument { .. })));
    assert!(matches!(Matrix::new(2, -5), Err(DataError::InvalidArgument { .. })));
}

#[test]
fn set_then_get_round_trips_including_negative_indices() {
    let mut m = Matrix::zeros(3, 3);
    m.set(-1, -1, 9.5).unwrap();
    assert_eq!(m.get(2, 2).unwrap(), 9.5);
    m.set(0, 1, -2.0).unwrap();
    assert_eq!(m.get(-3, -2).unwrap(), -2.0);

    assert!(matches!(m.get(3, 0), Err(DataError::IndexOutOfRange { .. })));
    assert!(matches!(m.get(0, -4), Err(DataError::IndexOutOfRange { .. })));
}

#[test]
fn additive_identities() {
    let a = sequential(4, 3);
    let zero = Matrix::zeros(4, 3);
    assert_eq!(a.add(&zero).unwrap(), a);
    assert_eq!(a.subtract(&a).unwrap(), zero);
    assert_eq!(&a * 2.0, a.add(&a).unwrap());
    assert_eq!(1.0 * &a, a);
}

#[test]
fn transpose_is_an_involution() {
    for (r, c) in [(1, 1), (3, 7), (33, 65), (64, 32)] {
        let a = sequential(r, c);
        let t = a.transpose();
        assert_eq!(t.shape(), (c, r));
        assert_eq!(t.transpose(), a);
        assert_eq!(t.get(0, -1).unwrap(), a.get(-1, 0).unwrap());
    }
}

#[test]
fn multiply_concrete_product() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
    let c = a.multiply(&b).unwrap();
    assert_eq!(c, Matrix::from_rows(&[vec![58.0, 64.0], vec![139.0, 154.0]]).unwrap());

    let i = Matrix::identity(3);
    assert_eq!(a.multiply(&i).unwrap(), a);
}

#[test]
fn shape_mismatches_are_reported() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(matches!(a.add(&b), Err(DataError::DimensionMismatch { .. })));
    assert!(matches!(a.subtract(&b), Err(DataError::DimensionMismatch { .. })));
    assert!(matches!(a.multiply(&a), Err(DataError::DimensionMismatch { .. })));
}

#[test]
fn slices_and_rows_are_copies() {
    let mut m = sequential(3, 3);
    let block = m
        .index(SliceRange::new(Some(0), Some(2)), Locator::Range(SliceRange::full()))
        .unwrap()
        .into_block()
        .unwrap();
    let row = m.get_row(-1).unwrap();
    let before_block = block.clone();
    let before_row = row.clone();

    m.set(0, 0, 1000.0).unwrap();
    m.set(2, 2, 1000.0).unwrap();
    assert_eq!(block, before_block);
    assert_eq!(row, before_row);
    assert_eq!(row.shape(), (1, 3));
}

#[test]
fn textual_index_specs() {
    let m = sequential(4, 4);
    assert_eq!(m.index_str("1, 2").unwrap(), Selection::Scalar(m.get(1, 2).unwrap()));

    let band = m.index_str("1:3, -1").unwrap().into_block().unwrap();
    assert_eq!(band.shape(), (2, 1));
    assert_eq!(band.get(1, 0).unwrap(), m.get(2, 3).unwrap());

    assert!(matches!(m.index_str("a, 1"), Err(DataError::InvalidIndexKind { .. })));
    assert!(matches!(m.index_str("1"), Err(DataError::InvalidIndexKind { .. })));
    assert!(matches!(m.index_str("0:4:2, 1"), Err(DataError::InvalidIndexKind { .. })));
    assert!(matches!(m.index_str("0:5, 1"), Err(DataError::IndexOutOfRange { .. })));
}

#[test]
fn repr_strings() {
    let m = Matrix::from_rows(&[vec![1.1, 2.2], vec![3.3, 4.4]]).unwrap();
    assert_eq!(m.to_string(), "Matrix(2x2) [\n  [1.1, 2.2],\n  [3.3, 4.4]\n]");
    assert_eq!(Matrix::zeros(0, 0).to_string(), "Matrix(0x0) [\n\n]");

    let mut one = Matrix::zeros(1, 1);
    one.set(0, 0, 5.0).unwrap();
    assert_eq!(one.to_string(), "Matrix(1x1) [\n  [5]\n]");
}
