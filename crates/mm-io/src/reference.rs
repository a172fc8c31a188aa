use std::path::Path;
use std::time::{Duration, Instant};

use log::debug;
use mm_core::multiply_sequential;

use crate::error::Result;
use crate::text::{load_matrix, save_matrix};

/// Compute the product of the matrices stored at `a_path` and `b_path` and
/// persist it to `out_path`.
///
/// The stored product is the independent reference that in-memory results
/// are later checked against. Returns the time spent multiplying, not
/// counting file I/O.
pub fn persist_reference(a_path: &Path, b_path: &Path, out_path: &Path) -> Result<Duration> {
    let a = load_matrix(a_path)?;
    let b = load_matrix(b_path)?;

    let start = Instant::now();
    let product = multiply_sequential(&a, &b)?;
    let elapsed = start.elapsed();

    save_matrix(&product, out_path)?;
    debug!(
        "persisted reference {} to {} in {:?}",
        product.shape(),
        out_path.display(),
        elapsed
    );
    Ok(elapsed)
}
