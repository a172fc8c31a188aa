use std::fs;
use std::time::Duration;

use log::{debug, info};
use mm_core::{ensure_equal, Matrix, Multiplier, ParallelRowMultiplier, SequentialMultiplier};
use mm_io::{generate_and_save, load_matrix, persist_reference};

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::report::{IterationTimes, Report, RunSummary};
use crate::timing::timed;

/// Run every configured iteration, writing the report as it goes.
///
/// Stops at the first error. A disagreement between results is
/// `BenchError::Mismatch` and ends the run.
pub fn run(config: &BenchConfig) -> Result<RunSummary> {
    fs::create_dir_all(&config.run.data_dir)?;
    let mut report = Report::create(&config.report_path())?;
    let mut summary = RunSummary::default();

    let total = config.run.iterations;
    for index in 1..=total {
        info!("Iteration {}/{}", index, total);
        let times = run_iteration(config, index)?;
        report.write_iteration(index, &times)?;
        summary.record(&times);
    }

    report.write_averages(&summary)?;
    Ok(summary)
}

/// One iteration: generate operands on disk, persist the reference product,
/// reload everything, time both multipliers and cross-validate.
pub fn run_iteration(config: &BenchConfig, index: usize) -> Result<IterationTimes> {
    let (a_path, b_path, result_path) = (
        config.matrix_a_path(),
        config.matrix_b_path(),
        config.result_path(),
    );

    generate_and_save(
        config.matrices.rows,
        config.matrices.inner,
        config.seed_for(index),
        &a_path,
        &b_path,
    )?;
    let reference_time = persist_reference(&a_path, &b_path, &result_path)?;

    let a = load_matrix(&a_path)?;
    let b = load_matrix(&b_path)?;
    let reference = load_matrix(&result_path)?;

    let (parallel, parallel_time) = time_multiplier(&ParallelRowMultiplier::new(), &a, &b)?;
    let (sequential, sequential_time) = time_multiplier(&SequentialMultiplier::new(), &a, &b)?;

    cross_validate(&parallel, &sequential, &reference)?;
    debug!(
        "iteration {}: parallel {:?}, sequential {:?}, reference {:?}",
        index, parallel_time, sequential_time, reference_time
    );

    Ok(IterationTimes {
        reference: reference_time,
        parallel: parallel_time,
        sequential: sequential_time,
    })
}

/// Multiply `a @ b` with `multiplier`, returning the product and the time it took.
pub fn time_multiplier(
    multiplier: &dyn Multiplier,
    a: &Matrix,
    b: &Matrix,
) -> Result<(Matrix, Duration)> {
    let (product, elapsed) = timed(|| multiplier.multiply(a, b));
    let product = product?;
    info!(
        "{} multiplication took {:.4} seconds",
        multiplier.name(),
        elapsed.as_secs_f64()
    );
    Ok((product, elapsed))
}

/// Require `parallel == sequential == reference`, exactly.
pub fn cross_validate(parallel: &Matrix, sequential: &Matrix, reference: &Matrix) -> Result<()> {
    ensure_equal(sequential, parallel).map_err(|source| BenchError::Mismatch {
        against: "sequential",
        source,
    })?;
    ensure_equal(reference, parallel).map_err(|source| BenchError::Mismatch {
        against: "persisted reference",
        source,
    })?;
    info!("Results are the same for all methods.");
    Ok(())
}
