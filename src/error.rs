use std::path::PathBuf;
use thiserror::Error;

/// Error type for the nplot pipeline. Every variant is fatal: the run
/// aborts with a non-zero exit status and nothing is partially written.
#[derive(Error, Debug)]
pub enum NplotError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("input file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{}:{line}: '{value}' is not a non-negative integer", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("resolved genome length {0} is not positive (are all inputs empty?)")]
    Config(f64),

    #[error("N-statistic threshold {0} must lie strictly between 0.0 and 1.0")]
    Range(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plot rendering failed: {0}")]
    Render(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NplotError>;
