use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What one coder recorded for one (item, attribute, arm).
///
/// Absence is represented by the arm missing from its [`ArmMap`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArmValue {
    /// The attribute was ticked for the arm without selecting any text.
    Ticked,
    /// One or more raw excerpts, in export order. Never empty.
    Excerpts(Vec<String>),
}

impl ArmValue {
    /// Fold another excerpt into this value.
    ///
    /// A tick is upgraded to a one-element list; an existing list grows.
    pub fn push_excerpt(&mut self, text: String) {
        match self {
            Self::Ticked => *self = Self::Excerpts(vec![text]),
            Self::Excerpts(excerpts) => excerpts.push(text),
        }
    }
}

/// Arm name (commas escaped) to recorded value, in first-seen order.
pub type ArmMap = IndexMap<String, ArmValue>;

/// Attribute id to its arms, in first-seen order.
pub type AttributeMap = IndexMap<String, ArmMap>;

/// One coder's flattened annotations: item id → attribute id → arm → value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoderAnnotations {
    items: IndexMap<String, AttributeMap>,
}

impl CoderAnnotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `item_id` has a record, even if it ends up with no codes.
    pub fn ensure_item(&mut self, item_id: &str) -> &mut AttributeMap {
        self.items.entry(item_id.to_string()).or_default()
    }

    /// Record a span of selected text for an arm, merging with earlier codes.
    pub fn add_excerpt(&mut self, item_id: &str, attribute_id: &str, arm: &str, text: String) {
        let arms = self.arms_mut(item_id, attribute_id);
        match arms.get_mut(arm) {
            Some(value) => value.push_excerpt(text),
            None => {
                arms.insert(arm.to_string(), ArmValue::Excerpts(vec![text]));
            }
        }
    }

    /// Record a tick without text. Existing excerpts for the arm are kept.
    pub fn add_tick(&mut self, item_id: &str, attribute_id: &str, arm: &str) {
        self.arms_mut(item_id, attribute_id)
            .entry(arm.to_string())
            .or_insert(ArmValue::Ticked);
    }

    /// Create the arm map for an attribute if this is its first occurrence.
    pub fn arms_mut(&mut self, item_id: &str, attribute_id: &str) -> &mut ArmMap {
        self.ensure_item(item_id)
            .entry(attribute_id.to_string())
            .or_default()
    }

    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&AttributeMap> {
        self.items.get(item_id)
    }

    #[must_use]
    pub fn arms(&self, item_id: &str, attribute_id: &str) -> Option<&ArmMap> {
        self.items.get(item_id)?.get(attribute_id)
    }

    #[must_use]
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    pub fn items(&self) -> impl Iterator<Item = (&String, &AttributeMap)> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
