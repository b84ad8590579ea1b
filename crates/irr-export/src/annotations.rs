//! Annotation flattening: item → attribute → arm → coded value.

use irr_core::entities::CoderAnnotations;
use irr_core::text::escape_name;

use crate::document::ExportDocument;

/// Flatten every code of every reference into a [`CoderAnnotations`] map.
///
/// Codes listed more than once for the same attribute of an item are merged
/// arm by arm: text spans append to the arm's excerpt list and a tick never
/// replaces existing text.
#[must_use]
pub fn flatten(document: &ExportDocument) -> CoderAnnotations {
    let mut annotations = CoderAnnotations::new();
    let mut codes = 0usize;

    for reference in &document.references {
        annotations.ensure_item(&reference.item_id);

        for code in &reference.codes {
            codes += 1;
            // First occurrence creates the (possibly empty) arm map.
            annotations.arms_mut(&reference.item_id, &code.attribute_id);

            match code.text_details() {
                Some(details) => {
                    for detail in details {
                        annotations.add_excerpt(
                            &reference.item_id,
                            &code.attribute_id,
                            &escape_name(&detail.item_arm),
                            detail.text.clone(),
                        );
                    }
                }
                None => annotations.add_tick(
                    &reference.item_id,
                    &code.attribute_id,
                    &escape_name(&code.arm_title),
                ),
            }
        }
    }

    tracing::debug!(
        path = %document.path().display(),
        items = annotations.len(),
        codes,
        "flattened annotations"
    );
    annotations
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use irr_core::entities::ArmValue;
    use pretty_assertions::assert_eq;

    use super::*;

    fn flatten_json(json: &str) -> CoderAnnotations {
        let doc = ExportDocument::parse(Path::new("codes.json"), json).unwrap();
        flatten(&doc)
    }

    #[test]
    fn ticked_code_uses_arm_title() {
        let ann = flatten_json(
            r#"{"References": [{"ItemId": 1, "Codes": [
                {"AttributeId": 10, "ArmTitle": "Control, usual care"}
            ]}], "CodeSets": []}"#,
        );
        let arms = ann.arms("1", "10").unwrap();
        assert_eq!(arms.get("Control;;;; usual care"), Some(&ArmValue::Ticked));
    }

    #[test]
    fn spans_group_by_item_arm() {
        let ann = flatten_json(
            r#"{"References": [{"ItemId": 1, "Codes": [
                {"AttributeId": 10, "ArmTitle": "", "ItemAttributeFullTextDetails": [
                    {"ItemArm": "", "Text": "one"},
                    {"ItemArm": "Arm, B", "Text": "two"},
                    {"ItemArm": "", "Text": "three"}
                ]}
            ]}], "CodeSets": []}"#,
        );
        let arms = ann.arms("1", "10").unwrap();
        assert_eq!(
            arms.keys().collect::<Vec<_>>(),
            vec!["", "Arm;;;; B"]
        );
        assert_eq!(
            arms.get(""),
            Some(&ArmValue::Excerpts(vec!["one".into(), "three".into()]))
        );
        assert_eq!(
            arms.get("Arm;;;; B"),
            Some(&ArmValue::Excerpts(vec!["two".into()]))
        );
    }

    #[test]
    fn repeated_attribute_merges_instead_of_overwriting() {
        let ann = flatten_json(
            r#"{"References": [{"ItemId": 1, "Codes": [
                {"AttributeId": 10, "ArmTitle": "", "ItemAttributeFullTextDetails": [
                    {"ItemArm": "A", "Text": "first"}
                ]},
                {"AttributeId": 10, "ArmTitle": "B"},
                {"AttributeId": 10, "ArmTitle": "", "ItemAttributeFullTextDetails": [
                    {"ItemArm": "A", "Text": "second"}
                ]}
            ]}], "CodeSets": []}"#,
        );
        let arms = ann.arms("1", "10").unwrap();
        assert_eq!(arms.len(), 2);
        assert_eq!(
            arms.get("A"),
            Some(&ArmValue::Excerpts(vec!["first".into(), "second".into()]))
        );
        assert_eq!(arms.get("B"), Some(&ArmValue::Ticked));
    }

    #[test]
    fn uncoded_items_get_empty_records() {
        let ann = flatten_json(
            r#"{"References": [{"ItemId": 1}, {"ItemId": 2, "Codes": []}], "CodeSets": []}"#,
        );
        assert!(ann.contains_item("1"));
        assert!(ann.contains_item("2"));
        assert!(ann.item("1").unwrap().is_empty());
    }
}
