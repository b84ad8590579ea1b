use serde::{Deserialize, Serialize};

/// A reviewed reference (paper) shared by both coders' exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: String,
    pub short_title: String,
}

impl Item {
    pub fn new(id: impl Into<String>, short_title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_title: short_title.into(),
        }
    }
}
