use thiserror::Error;

use crate::attributes::AttributeKey;
use crate::special::SpecialDirectory;

/// Error type for file operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("File already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("No {kind} directory is available on this platform")]
    SpecialDirectoryUnavailable { kind: SpecialDirectory },

    #[error("Attribute {key} is not populated for {path}")]
    AttributeNotFound { key: AttributeKey, path: String },

    #[error("Attribute {key} has an unexpected value type for {path}")]
    AttributeType { key: AttributeKey, path: String },
}
