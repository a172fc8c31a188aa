pub mod kernel;
pub mod parallel;
pub mod sequential;

pub use parallel::ParallelRowMultiplier;
pub use sequential::SequentialMultiplier;

use crate::backend::Multiplier;
use crate::error::Result;
use crate::matrix::Matrix;

/// Multiply with one worker thread per output row.
pub fn multiply_parallel(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    ParallelRowMultiplier::new().multiply(a, b)
}

/// Multiply on the calling thread with no synchronization.
pub fn multiply_sequential(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    SequentialMultiplier::new().multiply(a, b)
}
