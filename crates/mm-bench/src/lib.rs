//! `mm-bench` - Repeated timing and cross-validation of the matrix multipliers.
//!
//! Each iteration generates fresh operands on disk, persists a reference
//! product, then times the row-parallel and sequential multipliers and
//! requires all three results to agree exactly.

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod run;
pub mod timing;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use report::{IterationTimes, Report, RunSummary};
pub use run::{cross_validate, run, run_iteration, time_multiplier};
pub use timing::timed;
