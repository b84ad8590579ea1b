//! Scheme loading: nested attribute tree to an ordered attribute list.

use irr_core::entities::Attribute;
use irr_core::text::escape_name;

use crate::document::{AttributeNode, ExportDocument};
use crate::error::ExportError;

/// A coder's coding scheme in pre-order (parents before their children).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    attributes: Vec<Attribute>,
}

impl Scheme {
    /// Flatten the first code set of `document`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingCodeSet`] if the export has no code set.
    pub fn from_document(document: &ExportDocument) -> Result<Self, ExportError> {
        let root = document.scheme_root()?;
        let mut attributes = Vec::new();
        collect(&root.attributes.list, &mut attributes);
        Ok(Self { attributes })
    }

    #[must_use]
    pub fn from_attributes(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// `(id, name)` pairs; names are comma-escaped.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute ids, index-aligned with [`Scheme::attributes`].
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.id.as_str()).collect()
    }

    /// Attribute names, index-aligned with [`Scheme::attributes`].
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.attributes.iter().any(|a| a.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

fn collect(nodes: &[AttributeNode], out: &mut Vec<Attribute>) {
    for node in nodes {
        out.push(Attribute::new(node.id.clone(), escape_name(&node.name)));
        if let Some(children) = &node.children {
            collect(&children.list, out);
        }
    }
}
