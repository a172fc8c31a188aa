//! `mm-core` - Integer matrices and the multipliers that compute their product.
//!
//! This crate provides:
//! - A row-major `Matrix` of `i64` with an immutable `Shape`
//! - A `Multiplier` trait for interchangeable multiplication strategies
//! - `SequentialMultiplier`, the single-threaded reference
//! - `ParallelRowMultiplier`, one thread per output row committing every cell
//!   through a single shared spin mutex
//! - Exact-equality validation between results

pub mod backend;
pub mod cpu;
pub mod error;
pub mod matrix;
pub mod shape;
pub mod validate;

// Re-export primary types at the crate root for convenience.
pub use backend::Multiplier;
pub use cpu::{multiply_parallel, multiply_sequential, ParallelRowMultiplier, SequentialMultiplier};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use shape::Shape;
pub use validate::{ensure_equal, matrices_equal};
