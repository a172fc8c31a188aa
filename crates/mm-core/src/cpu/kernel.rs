// Dot-product kernel shared by both multipliers.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// `sum_k a_row[k] * b[k][col]`, accumulated locally.
///
/// Overflow of either the product or the running sum is reported as
/// `MatrixError::Overflow` for cell (`row`, `col`) rather than wrapping.
pub fn dot(a_row: &[i64], b: &Matrix, row: usize, col: usize) -> Result<i64> {
    a_row
        .iter()
        .zip(b.column(col))
        .try_fold(0i64, |acc, (&x, y)| {
            x.checked_mul(y).and_then(|p| acc.checked_add(p))
        })
        .ok_or(MatrixError::Overflow { row, col })
}
