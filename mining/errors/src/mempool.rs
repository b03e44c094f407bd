use thiserror::Error;

/// Failures at the input boundary, while turning a mempool snapshot file into transactions
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open mempool file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read mempool record: {0}")]
    Csv(#[from] csv::Error),

    #[error("mempool record on line {line} has {found} field(s), expected at least 3")]
    MissingFields { line: u64, found: usize },

    #[error("mempool record on line {line} has an invalid {field} value '{value}'")]
    InvalidNumber { line: u64, field: &'static str, value: String },
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
