use thiserror::Error;

/// Violations of the guarantees a block template is expected to uphold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("transaction {0} was admitted more than once")]
    DuplicateTransaction(String),

    #[error("transaction {tx} was admitted before its parent {parent}")]
    ParentNotIncluded { tx: String, parent: String },

    #[error("block weight {total_weight} exceeds the limit of {limit} by more than the last admitted weight {last_weight}")]
    WeightLimitExceeded { total_weight: u64, last_weight: u64, limit: u64 },
}

pub type BuilderResult<T> = std::result::Result<T, BuilderError>;
