use serde::{Deserialize, Serialize};

/// A single coding category from the scheme.
///
/// `name` is stored with commas escaped (see [`crate::text::escape_name`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub id: String,
    pub name: String,
}

impl Attribute {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
