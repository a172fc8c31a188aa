use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// True iff `x` and `y` have the same shape and every element is equal.
pub fn matrices_equal(x: &Matrix, y: &Matrix) -> bool {
    x.shape() == y.shape() && x.data() == y.data()
}

/// Check `actual` against `expected`, naming the first difference.
///
/// Returns `ShapeDiffers` when the shapes disagree, otherwise `Mismatch` for
/// the first differing cell in row-major order.
pub fn ensure_equal(expected: &Matrix, actual: &Matrix) -> Result<()> {
    if expected.shape() != actual.shape() {
        return Err(MatrixError::ShapeDiffers {
            expected: expected.shape(),
            actual: actual.shape(),
        });
    }

    let cols = expected.cols();
    match expected
        .data()
        .iter()
        .zip(actual.data())
        .position(|(e, a)| e != a)
    {
        None => Ok(()),
        Some(idx) => Err(MatrixError::Mismatch {
            row: idx / cols,
            col: idx % cols,
            expected: expected.data()[idx],
            actual: actual.data()[idx],
        }),
    }
}
