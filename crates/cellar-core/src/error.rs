//! Error types for cellar-core

use thiserror::Error;

use crate::models::EntryId;

/// Result type alias using cellar-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellar-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required DOM binding was absent when the widget started
    #[error("Missing widget binding: {0}")]
    MissingBinding(&'static str),

    /// Configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A loaded catalog repeats an entry id
    #[error("Duplicate catalog entry id: {0}")]
    DuplicateEntryId(EntryId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
