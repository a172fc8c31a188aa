use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    ShapeMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("ragged rows: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("integer overflow computing cell ({row}, {col})")]
    Overflow { row: usize, col: usize },
    #[error("failed to spawn worker for row {row}: {reason}")]
    Spawn { row: usize, reason: String },
    #[error("worker for row {row} panicked")]
    WorkerPanicked { row: usize },
    #[error("shape differs: expected {expected}, got {actual}")]
    ShapeDiffers { expected: Shape, actual: Shape },
    #[error("value mismatch at ({row}, {col}): expected {expected}, got {actual}")]
    Mismatch {
        row: usize,
        col: usize,
        expected: i64,
        actual: i64,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
