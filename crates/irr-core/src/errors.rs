//! Cross-cutting error types.
//!
//! Stage-specific errors (`ExportError`, `AlphaError`, `ConfigError`) live in
//! their own crates. The binary converges all of them through `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting shared value types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A presence cell held something other than `0` or `1`.
    #[error("Invalid presence flag: {value:?} (expected \"0\" or \"1\")")]
    InvalidFlag { value: String },
}
