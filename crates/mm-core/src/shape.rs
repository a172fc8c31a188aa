use crate::error::{MatrixError, Result};
use std::fmt;

/// The dimensions of a matrix: `rows` by `cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Shape of `a @ b`, checking that the inner dimensions agree.
    ///
    /// `a` is [m, k], `b` is [k, n], the result is [m, n].
    pub fn matmul_output(a: &Shape, b: &Shape) -> Result<Shape> {
        if a.cols != b.rows {
            return Err(MatrixError::ShapeMismatch {
                m: a.rows,
                k: a.cols,
                k2: b.rows,
                n: b.cols,
            });
        }
        Ok(Shape::new(a.rows, b.cols))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}x{}]", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}
