//! `mm-io` - Matrix files and test data for the multiplication experiment.
//!
//! - `text`: whitespace-delimited matrix files
//! - `generate`: random matrices with digits 0..=9
//! - `reference`: compute and persist the reference product

pub mod error;
pub mod generate;
pub mod reference;
pub mod text;

pub use error::{DataError, Result};
pub use generate::{generate_and_save, generate_matrix, generate_pair};
pub use reference::persist_reference;
pub use text::{format_matrix, load_matrix, parse_matrix, save_matrix, write_matrix};
