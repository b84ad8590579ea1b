//! Typed view of a coder's JSON export.
//!
//! Only the keys the reconciliation needs are modelled; everything else in the
//! export is ignored. `References` and `CodeSets` are both required, so a file
//! missing either fails at load time.

use std::path::{Path, PathBuf};

use irr_core::text::escape_name;
use serde::{Deserialize, Deserializer};

use crate::error::ExportError;

/// Ids appear as JSON integers in exports but are compared as strings.
///
/// String ids go through [`escape_name`] so every id fits one table field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
        RawId::Text(id) => escape_name(&id),
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportDocument {
    #[serde(skip)]
    path: PathBuf,
    #[serde(rename = "References")]
    pub references: Vec<Reference>,
    #[serde(rename = "CodeSets")]
    pub code_sets: Vec<CodeSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    #[serde(rename = "ItemId", deserialize_with = "deserialize_id")]
    pub item_id: String,
    #[serde(rename = "ShortTitle", default)]
    pub short_title: String,
    #[serde(rename = "Codes", default)]
    pub codes: Vec<Code>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Code {
    #[serde(rename = "AttributeId", deserialize_with = "deserialize_id")]
    pub attribute_id: String,
    #[serde(rename = "ArmTitle", default)]
    pub arm_title: String,
    #[serde(rename = "ItemAttributeFullTextDetails", default)]
    pub full_text_details: Option<Vec<TextDetail>>,
}

impl Code {
    /// Selected text spans, or `None` when the code was ticked without text.
    #[must_use]
    pub fn text_details(&self) -> Option<&[TextDetail]> {
        self.full_text_details
            .as_deref()
            .filter(|details| !details.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextDetail {
    #[serde(rename = "ItemArm", default)]
    pub item_arm: String,
    #[serde(rename = "Text")]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeSet {
    #[serde(rename = "Attributes")]
    pub attributes: AttributeList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeList {
    #[serde(rename = "AttributesList")]
    pub list: Vec<AttributeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeNode {
    #[serde(rename = "AttributeId", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "AttributeName")]
    pub name: String,
    #[serde(rename = "Attributes", default)]
    pub children: Option<AttributeList>,
}

impl ExportDocument {
    /// Read and parse an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be read and
    /// [`ExportError::Malformed`] if it is not a valid export.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let json = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::parse(path, &json)?;
        tracing::debug!(
            path = %path.display(),
            references = document.references.len(),
            "loaded export"
        );
        Ok(document)
    }

    /// Parse export JSON; `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Malformed`] if the JSON is invalid or a required
    /// key is missing.
    pub fn parse(path: &Path, json: &str) -> Result<Self, ExportError> {
        let mut document: Self =
            serde_json::from_str(json).map_err(|source| ExportError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        document.path = path.to_path_buf();
        Ok(document)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The coding scheme: the first code set of the export.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingCodeSet`] if `CodeSets` is empty.
    pub fn scheme_root(&self) -> Result<&CodeSet, ExportError> {
        self.code_sets
            .first()
            .ok_or_else(|| ExportError::MissingCodeSet {
                path: self.path.clone(),
            })
    }
}
