use mm_core::MatrixError;
use mm_io::DataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("data error: {0}")]
    Data(#[from] DataError),
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
    #[error("config line {line}: {reason}")]
    Config { line: usize, reason: String },
    #[error("parallel result differs from the {against} result: {source}")]
    Mismatch {
        against: &'static str,
        #[source]
        source: MatrixError,
    },
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
