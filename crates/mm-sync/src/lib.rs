//! `mm-sync` - Minimal busy-wait mutual exclusion for mm-core.
//!
//! This crate provides:
//! - `AtomicCell`, a single shared machine word with compare-and-swap
//! - `RawSpinMutex`, an `acquire`/`release` lock built on one `AtomicCell`
//! - `SpinMutex<T>`, the same lock paired with the data it guards
//!
//! None of these ever park the calling thread. Waiting is active polling.

pub mod cell;
pub mod mutex;
pub mod raw;

pub use cell::AtomicCell;
pub use mutex::{SpinGuard, SpinMutex};
pub use raw::RawSpinMutex;
