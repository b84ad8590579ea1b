//! Reference loading: the reviewed items of an export.

use irr_core::entities::Item;

use crate::document::ExportDocument;

/// Items in document order.
#[must_use]
pub fn load_items(document: &ExportDocument) -> Vec<Item> {
    document
        .references
        .iter()
        .map(|reference| Item::new(reference.item_id.clone(), reference.short_title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preserves_document_order() {
        let doc = ExportDocument::parse(
            Path::new("refs.json"),
            r#"{
                "References": [
                    {"ItemId": 30, "ShortTitle": "Smith (2019)"},
                    {"ItemId": 10, "ShortTitle": "Jones, Lee (2020)"}
                ],
                "CodeSets": []
            }"#,
        )
        .unwrap();

        assert_eq!(
            load_items(&doc),
            vec![
                Item::new("30", "Smith (2019)"),
                Item::new("10", "Jones, Lee (2020)"),
            ]
        );
    }
}
