use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] cellar_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Search query must be at least {0} characters unless a platform filter is given")]
    QueryTooShort(usize),
    #[error("Result limit must be at least 1")]
    InvalidLimit,
}
