//! # irr-core
//!
//! Core types and text helpers shared by every `irr` crate.
//!
//! - Entity structs for the coding scheme, reviewed items, annotations and
//!   comparison rows
//! - Sentinel strings written into the comparison tables
//! - Comma escaping and excerpt cleaning used to keep CSV lines at seven fields
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod text;
