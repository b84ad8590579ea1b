//! Entity structs for the reconciliation pipeline.
//!
//! Everything here is derived per run from the two coders' exports and held in
//! memory only until the output files are written.

mod annotation;
mod attribute;
mod item;
mod row;

pub use annotation::{ArmMap, ArmValue, AttributeMap, CoderAnnotations};
pub use attribute::Attribute;
pub use item::Item;
pub use row::{CoderCell, ComparisonRow, Presence};
