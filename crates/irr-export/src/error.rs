//! Export parsing error types.

use std::path::PathBuf;

/// Errors that can occur while reading a coder's export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not JSON or is missing a required key.
    #[error("malformed export {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `CodeSets` is present but empty.
    #[error("export {path} has no code set")]
    MissingCodeSet { path: PathBuf },
}
