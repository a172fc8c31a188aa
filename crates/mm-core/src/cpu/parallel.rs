use std::io;
use std::ops::IndexMut;
use std::thread;

use log::debug;
use mm_sync::SpinMutex;

use crate::backend::Multiplier;
use crate::cpu::kernel::dot;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::shape::Shape;

/// Row-parallel multiplier.
///
/// Spawns one thread per output row. Each worker computes its dot products
/// into a local accumulator, then commits every cell through a single
/// [`SpinMutex`] created for the call and shared by all workers. Because the
/// lock is shared across rows, commits of all cells are fully serialized;
/// only the summation runs in parallel.
///
/// Concurrency is not bounded: `rows` threads are live at once, whatever the
/// hardware parallelism. If the OS refuses a thread, dispatch stops, the
/// workers already started are joined, and `MatrixError::Spawn` is returned.
/// Workers cannot be cancelled. The caller blocks until every worker has
/// finished.
#[derive(Debug, Clone)]
pub struct ParallelRowMultiplier;

impl ParallelRowMultiplier {
    pub fn new() -> Self {
        ParallelRowMultiplier
    }
}

impl Default for ParallelRowMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for ParallelRowMultiplier {
    fn name(&self) -> &str {
        "parallel-row"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let shape = Shape::matmul_output(&a.shape(), &b.shape())?;
        if shape.is_empty() {
            debug!("parallel multiply {} @ {}: empty output, no workers", a.shape(), b.shape());
            return Ok(Matrix::zeros(shape));
        }

        let output = SpinMutex::new(vec![0i64; shape.numel()]);
        debug!(
            "parallel multiply {} @ {}: spawning {} workers",
            a.shape(),
            b.shape(),
            shape.rows()
        );

        let outcomes: Vec<Result<()>> = thread::scope(|s| {
            let output = &output;
            let mut workers = Vec::with_capacity(shape.rows());
            let mut refused = None;
            for row in 0..shape.rows() {
                let spawned = thread::Builder::new()
                    .name(format!("mm-row-{}", row))
                    .spawn_scoped(s, move || compute_row(a, b, row, output));
                match spawned {
                    Ok(worker) => workers.push(worker),
                    Err(e) => {
                        // Stop dispatching; the workers already running are
                        // still joined below.
                        refused = Some(spawn_error(row, e));
                        break;
                    }
                }
            }

            // Join barrier. A panicking worker is joined here so the scope
            // itself does not re-raise the panic.
            let mut outcomes: Vec<Result<()>> = workers
                .into_iter()
                .enumerate()
                .map(|(row, worker)| {
                    worker
                        .join()
                        .unwrap_or(Err(MatrixError::WorkerPanicked { row }))
                })
                .collect();
            outcomes.extend(refused.map(Err));
            outcomes
        });

        if let Some(err) = outcomes.into_iter().find_map(|r| r.err()) {
            debug!("parallel multiply failed: {}", err);
            return Err(err);
        }
        Ok(Matrix::new(output.into_inner(), shape))
    }
}

fn spawn_error(row: usize, err: io::Error) -> MatrixError {
    MatrixError::Spawn {
        row,
        reason: err.to_string(),
    }
}

/// Compute row `row` of `a @ b`, committing each cell under `output`'s lock.
///
/// `output` is indexed row-major with `b.cols()` cells per row.
fn compute_row<C>(a: &Matrix, b: &Matrix, row: usize, output: &SpinMutex<C>) -> Result<()>
where
    C: IndexMut<usize, Output = i64>,
{
    let a_row = a.row(row);
    let n = b.cols();
    for col in 0..n {
        let sum = dot(a_row, b, row, col)?;
        let mut cells = output.lock();
        cells[row * n + col] = sum;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::SequentialMultiplier;

    fn m(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    /// Deterministic filler so tests need no RNG.
    fn filled(rows: usize, cols: usize, salt: i64) -> Matrix {
        let data = (0..rows * cols)
            .map(|i| ((i as i64 * 31 + salt * 17) % 19) - 9)
            .collect();
        Matrix::new(data, Shape::new(rows, cols))
    }

    #[test]
    fn test_square() {
        let c = ParallelRowMultiplier::new()
            .multiply(&m(vec![vec![1, 2], vec![3, 4]]), &m(vec![vec![5, 6], vec![7, 8]]))
            .unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_non_square() {
        let c = ParallelRowMultiplier::new()
            .multiply(&m(vec![vec![1, 0, 2]]), &m(vec![vec![0], vec![1], vec![0]]))
            .unwrap();
        assert_eq!(c.to_rows(), vec![vec![0]]);
    }

    #[test]
    fn test_matches_sequential() {
        let a = filled(37, 23, 1);
        let b = filled(23, 41, 2);
        let par = ParallelRowMultiplier::new().multiply(&a, &b).unwrap();
        let seq = SequentialMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(par, seq);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let a = filled(50, 8, 3);
        let b = filled(8, 6, 4);
        let expected = SequentialMultiplier::new().multiply(&a, &b).unwrap();
        let multiplier = ParallelRowMultiplier::new();
        for _ in 0..200 {
            assert_eq!(multiplier.multiply(&a, &b).unwrap(), expected);
        }
    }

    #[test]
    fn test_shape_mismatch_leaves_inputs_untouched() {
        let a = m(vec![vec![1, 2, 3]]);
        let b = m(vec![vec![1, 2], vec![3, 4]]);
        let (a_before, b_before) = (a.clone(), b.clone());
        let err = ParallelRowMultiplier::new().multiply(&a, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                m: 1,
                k: 3,
                k2: 2,
                n: 2
            }
        );
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_zero_rows() {
        let a = Matrix::zeros(Shape::new(0, 3));
        let b = filled(3, 2, 0);
        let c = ParallelRowMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), Shape::new(0, 2));
    }

    #[test]
    fn test_zero_columns() {
        let a = filled(4, 3, 0);
        let b = Matrix::zeros(Shape::new(3, 0));
        let c = ParallelRowMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), Shape::new(4, 0));
        assert!(c.data().is_empty());
    }

    #[test]
    fn test_overflow_propagates() {
        let a = m(vec![vec![1], vec![i64::MAX], vec![1]]);
        let b = m(vec![vec![2]]);
        let err = ParallelRowMultiplier::new().multiply(&a, &b).unwrap_err();
        assert_eq!(err, MatrixError::Overflow { row: 1, col: 0 });
    }

    #[test]
    fn test_spawn_error_mapping() {
        let err = spawn_error(
            1500,
            io::Error::new(io::ErrorKind::WouldBlock, "Resource temporarily unavailable"),
        );
        assert_eq!(
            err,
            MatrixError::Spawn {
                row: 1500,
                reason: "Resource temporarily unavailable".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "failed to spawn worker for row 1500: Resource temporarily unavailable"
        );
    }

    /// Output cells that record how often each one is written.
    struct CountingCells {
        values: Vec<i64>,
        writes: Vec<usize>,
    }

    impl std::ops::Index<usize> for CountingCells {
        type Output = i64;

        fn index(&self, idx: usize) -> &i64 {
            &self.values[idx]
        }
    }

    impl IndexMut<usize> for CountingCells {
        fn index_mut(&mut self, idx: usize) -> &mut i64 {
            self.writes[idx] += 1;
            &mut self.values[idx]
        }
    }

    #[test]
    fn test_every_cell_committed_exactly_once() {
        let a = filled(64, 9, 5);
        let b = filled(9, 13, 6);
        let n = a.rows() * b.cols();
        let output = SpinMutex::new(CountingCells {
            values: vec![0; n],
            writes: vec![0; n],
        });

        thread::scope(|s| {
            for row in 0..a.rows() {
                let (a, b, output) = (&a, &b, &output);
                s.spawn(move || compute_row(a, b, row, output).unwrap());
            }
        });

        let cells = output.into_inner();
        assert!(cells.writes.iter().all(|&w| w == 1), "writes: {:?}", cells.writes);
        let expected = SequentialMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(cells.values, expected.data());
    }

    #[test]
    fn test_entry_points() {
        let a = filled(5, 4, 7);
        let b = filled(4, 3, 8);
        assert_eq!(
            crate::cpu::multiply_parallel(&a, &b).unwrap(),
            crate::cpu::multiply_sequential(&a, &b).unwrap()
        );
    }
}
