use blockbuilder_core::log::LogError;
use blockbuilder_mining::errors::LoadError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockBuilderError {
    #[error("failed to initialize the logger: {0}")]
    Logger(#[from] LogError),

    #[error("error when parsing the mempool: {0}")]
    Load(#[from] LoadError),

    #[error("failed to create output file {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write the block: {0}")]
    Io(#[from] io::Error),
}
