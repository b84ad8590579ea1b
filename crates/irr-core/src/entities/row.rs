use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::ArmValue;
use crate::errors::CoreError;
use crate::text::{NOTHING_CODED, TICKED_NO_VALUE, clean_excerpt, join_excerpts};

/// Binary presence of an annotation, written as `0` or `1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Absent,
    Present,
}

impl Presence {
    #[must_use]
    pub const fn as_flag(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
        }
    }

    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

impl FromStr for Presence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Absent),
            "1" => Ok(Self::Present),
            other => Err(CoreError::InvalidFlag {
                value: other.to_string(),
            }),
        }
    }
}

/// One coder's resolved cell for a comparison row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoderCell {
    NothingCoded,
    TickedNoValue,
    /// Cleaned excerpt text; several excerpts are already joined.
    Text(String),
}

impl CoderCell {
    /// Resolve the value a coder recorded for an arm (or its absence).
    #[must_use]
    pub fn resolve(value: Option<&ArmValue>) -> Self {
        match value {
            None => Self::NothingCoded,
            Some(ArmValue::Ticked) => Self::TickedNoValue,
            Some(ArmValue::Excerpts(excerpts)) => match excerpts.as_slice() {
                [single] => Self::Text(clean_excerpt(single)),
                many => Self::Text(join_excerpts(many)),
            },
        }
    }

    #[must_use]
    pub const fn presence(&self) -> Presence {
        match self {
            Self::NothingCoded => Presence::Absent,
            Self::TickedNoValue | Self::Text(_) => Presence::Present,
        }
    }

    /// Text written into the text table.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::NothingCoded => NOTHING_CODED,
            Self::TickedNoValue => TICKED_NO_VALUE,
            Self::Text(text) => text,
        }
    }
}

/// One (item, attribute, arm) line shared by the binary and text tables.
///
/// `attribute_name`, `short_title` and `arm` are already comma-escaped and
/// `arm` is already in display form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonRow {
    pub item_id: String,
    pub short_title: String,
    pub attribute_id: String,
    pub attribute_name: String,
    pub arm: String,
    pub coder1: CoderCell,
    pub coder2: CoderCell,
}
