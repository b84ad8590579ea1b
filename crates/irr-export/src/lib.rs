//! # irr-export
//!
//! Parsing of a coder's systematic-review JSON export into the three views the
//! reconciliation needs:
//! - [`Scheme`]: the coding scheme, flattened in pre-order
//! - items: the reviewed references, in document order
//! - [`CoderAnnotations`]: item → attribute → arm → coded value
//!
//! Each export file is read once; [`CoderExport::load`] derives all three.

pub mod annotations;
pub mod document;
pub mod references;
pub mod scheme;

mod error;

pub use document::ExportDocument;
pub use error::ExportError;
pub use scheme::Scheme;

use std::path::{Path, PathBuf};

use irr_core::entities::{CoderAnnotations, Item};

/// Everything derived from one coder's export file.
#[derive(Debug, Clone)]
pub struct CoderExport {
    pub path: PathBuf,
    pub scheme: Scheme,
    pub items: Vec<Item>,
    pub annotations: CoderAnnotations,
}

impl CoderExport {
    /// Read `path` and derive the scheme, items and annotations.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the file cannot be read, is not a valid
    /// export, or has no code set.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let document = ExportDocument::load(path)?;
        Self::from_document(&document)
    }

    /// Derive all views from an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingCodeSet`] if the export has no code set.
    pub fn from_document(document: &ExportDocument) -> Result<Self, ExportError> {
        Ok(Self {
            path: document.path().to_path_buf(),
            scheme: Scheme::from_document(document)?,
            items: references::load_items(document),
            annotations: annotations::flatten(document),
        })
    }

    /// Display label for reports: the file path as given.
    #[must_use]
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }
}
