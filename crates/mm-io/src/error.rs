use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("format error on line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error("matrix file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("matrix error: {0}")]
    Matrix(#[from] mm_core::MatrixError),
}

pub type Result<T> = std::result::Result<T, DataError>;
