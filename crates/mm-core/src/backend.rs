use std::fmt::Debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// A strategy for computing the product of two matrices.
///
/// Every implementation computes the same thing, `C[i][j] = sum_k A[i][k] * B[k][j]`,
/// and must reject `A.cols != B.rows` with `MatrixError::ShapeMismatch`
/// before doing any work. Inputs are never mutated.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this multiplier (e.g., "sequential", "parallel-row").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: shape [m, k]
    /// - `b`: shape [k, n]
    /// - Returns: shape [m, n]
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
