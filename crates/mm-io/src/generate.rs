use std::path::Path;

use log::debug;
use mm_core::{Matrix, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::text::save_matrix;

/// Largest value a generated cell can hold. Cells are uniform over `0..=MAX_VALUE`.
pub const MAX_VALUE: i64 = 9;

/// Fill a matrix of the given shape with uniform digits.
pub fn generate_matrix<R: Rng + ?Sized>(shape: Shape, rng: &mut R) -> Matrix {
    let data = (0..shape.numel())
        .map(|_| rng.gen_range(0..=MAX_VALUE))
        .collect();
    Matrix::new(data, shape)
}

/// Generate the operand pair for one experiment: A is `rows x inner`,
/// B is `inner x rows`.
///
/// A seed makes the pair reproducible; `None` seeds from OS entropy.
pub fn generate_pair(rows: usize, inner: usize, seed: Option<u64>) -> (Matrix, Matrix) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let a = generate_matrix(Shape::new(rows, inner), &mut rng);
    let b = generate_matrix(Shape::new(inner, rows), &mut rng);
    (a, b)
}

/// Generate a pair and write it to `a_path` and `b_path`.
pub fn generate_and_save(
    rows: usize,
    inner: usize,
    seed: Option<u64>,
    a_path: &Path,
    b_path: &Path,
) -> Result<(Matrix, Matrix)> {
    let (a, b) = generate_pair(rows, inner, seed);
    save_matrix(&a, a_path)?;
    save_matrix(&b, b_path)?;
    debug!("generated operands {} and {}", a.shape(), b.shape());
    Ok((a, b))
}
