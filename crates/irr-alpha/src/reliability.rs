//! Per-attribute reliability from the binary comparison table.

use std::path::Path;

use indexmap::IndexMap;
use irr_core::entities::Presence;
use irr_core::text::restore_name;
use serde::Serialize;

use crate::error::AlphaError;
use crate::krippendorff::{Alpha, nominal_alpha_pairs};

/// Aggregate row over every line of the binary table.
pub const ALL_ENTITIES: &str = "All Entities";

/// Aggregate row over attributes with at least one annotation.
pub const ENTITIES_WITH_DATA: &str = "Entities with data";

const FIELDS: usize = 7;
const NAME_FIELD: usize = 3;
const CODER1_FIELD: usize = 5;
const CODER2_FIELD: usize = 6;

/// Two aligned presence columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    pub coder1: Vec<u32>,
    pub coder2: Vec<u32>,
}

impl Columns {
    fn push(&mut self, coder1: Presence, coder2: Presence) {
        self.coder1.push(coder1.as_flag());
        self.coder2.push(coder2.as_flag());
    }

    fn extend(&mut self, other: &Self) {
        self.coder1.extend_from_slice(&other.coder1);
        self.coder2.extend_from_slice(&other.coder2);
    }

    /// At least one coder marked at least one row.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.coder1.iter().chain(&self.coder2).any(|flag| *flag == 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coder1.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coder1.is_empty()
    }

    #[must_use]
    pub fn alpha(&self) -> Alpha {
        nominal_alpha_pairs(&self.coder1, &self.coder2)
    }
}

/// The binary table regrouped by attribute name (first-seen order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceTable {
    all: Columns,
    by_attribute: IndexMap<String, Columns>,
}

impl PresenceTable {
    /// Read the binary table written earlier in the run.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaError::Io`] if the file cannot be read, or a parse
    /// error from [`PresenceTable::parse`].
    pub fn read(path: &Path) -> Result<Self, AlphaError> {
        let text = std::fs::read_to_string(path).map_err(|source| AlphaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse binary table text. The first line is the header and is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaError::FieldCount`] for a line without seven fields and
    /// [`AlphaError::Flag`] for a presence cell that is not `0` or `1`.
    pub fn parse(text: &str) -> Result<Self, AlphaError> {
        let mut table = Self::default();

        for (index, line) in text.lines().enumerate().skip(1) {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != FIELDS {
                return Err(AlphaError::FieldCount {
                    line: line_number,
                    expected: FIELDS,
                    found: fields.len(),
                });
            }
            let flag = |field: usize| {
                fields[field]
                    .parse::<Presence>()
                    .map_err(|source| AlphaError::Flag {
                        line: line_number,
                        source,
                    })
            };
            let coder1 = flag(CODER1_FIELD)?;
            let coder2 = flag(CODER2_FIELD)?;

            table.all.push(coder1, coder2);
            table
                .by_attribute
                .entry(fields[NAME_FIELD].to_string())
                .or_default()
                .push(coder1, coder2);
        }

        tracing::debug!(
            rows = table.all.len(),
            attributes = table.by_attribute.len(),
            "parsed binary table"
        );
        Ok(table)
    }

    /// Columns for one attribute name (escaped form, as written in the table).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Columns> {
        self.by_attribute.get(name)
    }

    /// Every row of the table.
    #[must_use]
    pub const fn all(&self) -> &Columns {
        &self.all
    }

    /// Rows of attributes that have at least one annotation.
    #[must_use]
    pub fn with_data(&self) -> Columns {
        let mut columns = Columns::default();
        for attribute in self.by_attribute.values().filter(|c| c.has_data()) {
            columns.extend(attribute);
        }
        columns
    }

    /// Alpha per attribute, then the two aggregates.
    #[must_use]
    pub fn alpha_table(&self) -> AlphaTable {
        let mut entries = IndexMap::with_capacity(self.by_attribute.len() + 2);
        for (name, columns) in &self.by_attribute {
            entries.insert(name.clone(), columns.alpha());
        }
        entries.insert(ALL_ENTITIES.to_string(), self.all.alpha());
        entries.insert(ENTITIES_WITH_DATA.to_string(), self.with_data().alpha());

        let undefined = entries.values().filter(|a| !a.is_defined()).count();
        tracing::info!(entries = entries.len(), undefined, "computed alpha table");
        AlphaTable { entries }
    }
}

/// Attribute name (escaped) → alpha, including the aggregate rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlphaTable {
    entries: IndexMap<String, Alpha>,
}

impl AlphaTable {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Alpha> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Alpha)> {
        self.entries.iter().map(|(name, alpha)| (name.as_str(), *alpha))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Results CSV with every field quoted and names un-escaped.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = format!("{},{}\n", quote("attributes"), quote("alpha values"));
        for (name, alpha) in self.iter() {
            out.push_str(&quote(&restore_name(name)));
            out.push(',');
            out.push_str(&quote(&alpha.to_string()));
            out.push('\n');
        }
        out
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
