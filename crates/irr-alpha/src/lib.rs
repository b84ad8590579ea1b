//! # irr-alpha
//!
//! Inter-rater reliability for the binary comparison table.
//!
//! [`krippendorff`] implements nominal Krippendorff's alpha over any number
//! of raters with missing values. [`reliability`] re-reads the binary table,
//! groups presence flags by attribute name and produces the [`AlphaTable`]
//! written to the results file.

pub mod krippendorff;
pub mod reliability;

mod error;

pub use error::AlphaError;
pub use krippendorff::{Alpha, nominal_alpha};
pub use reliability::{ALL_ENTITIES, AlphaTable, ENTITIES_WITH_DATA, PresenceTable};
