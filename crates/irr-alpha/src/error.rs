//! Reliability calculation error types.

use std::path::PathBuf;

use irr_core::errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AlphaError {
    #[error("failed to read binary table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line does not have the seven comparison fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A presence column is not `0` or `1`.
    #[error("line {line}: {source}")]
    Flag {
        line: usize,
        #[source]
        source: CoreError,
    },
}
