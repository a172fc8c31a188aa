use log::trace;

use crate::backend::Multiplier;
use crate::cpu::kernel::dot;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::shape::Shape;

/// Single-threaded multiplier.
///
/// Straightforward triple loop with no synchronization. Serves as the
/// ground-truth oracle the parallel path is checked against.
#[derive(Debug, Clone)]
pub struct SequentialMultiplier;

impl SequentialMultiplier {
    pub fn new() -> Self {
        SequentialMultiplier
    }
}

impl Default for SequentialMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SequentialMultiplier {
    fn name(&self) -> &str {
        "sequential"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let shape = Shape::matmul_output(&a.shape(), &b.shape())?;
        trace!("sequential multiply {} @ {}", a.shape(), b.shape());

        let mut c = Vec::with_capacity(shape.numel());
        for i in 0..shape.rows() {
            let a_row = a.row(i);
            for j in 0..shape.cols() {
                c.push(dot(a_row, b, i, j)?);
            }
        }
        Ok(Matrix::new(c, shape))
    }
}
