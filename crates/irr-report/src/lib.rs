//! # irr-report
//!
//! Human-readable and tabular reports built from two coders' exports:
//! - [`SchemeComparison`]: advisory diff of the two coding schemes
//! - [`ComparisonTable`]: the binary and text comparison tables

pub mod comparison;
pub mod table;

pub use comparison::SchemeComparison;
pub use table::{ComparisonTable, HEADER};
