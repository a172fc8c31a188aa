use crate::backend::Multiplier;
use crate::error::{MatrixError, Result};
use crate::shape::Shape;

/// A dense matrix of signed integers.
///
/// Holds contiguous, row-major `i64` data with an associated shape. The shape
/// never changes after construction, so every row has exactly `cols` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    shape: Shape,
}

impl Matrix {
    /// Create a matrix from row-major data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<i64>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Matrix { data, shape }
    }

    /// Build a matrix from a list of rows.
    ///
    /// An empty list gives a `[0x0]` matrix.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Matrix {
            data,
            shape: Shape::new(rows.len(), cols),
        })
    }

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(shape: Shape) -> Self {
        Matrix {
            data: vec![0; shape.numel()],
            shape,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Element at (`row`, `col`), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        Some(self.data[row * self.cols() + col])
    }

    /// One row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> &[i64] {
        assert!(row < self.rows(), "row {} out of bounds for {}", row, self.shape);
        let cols = self.cols();
        &self.data[row * cols..(row + 1) * cols]
    }

    /// Iterate over one column, top to bottom.
    ///
    /// # Panics
    /// Panics if `col >= cols()`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = i64> + '_ {
        assert!(col < self.cols(), "column {} out of bounds for {}", col, self.shape);
        self.data.iter().skip(col).step_by(self.cols()).copied()
    }

    /// Iterate over all rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        (0..self.rows()).map(move |r| self.row(r))
    }

    /// The underlying row-major data.
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.iter_rows().map(<[i64]>::to_vec).collect()
    }

    /// Matrix product `self @ other` computed by `multiplier`.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    pub fn matmul(&self, other: &Matrix, multiplier: &dyn Multiplier) -> Result<Matrix> {
        multiplier.multiply(self, other)
    }
}
