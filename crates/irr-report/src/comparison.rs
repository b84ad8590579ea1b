//! Scheme comparison between two coders' exports.
//!
//! The comparison is advisory. Nothing here stops the run; coder 1's scheme
//! is used downstream regardless of what this report finds.

use std::collections::HashSet;
use std::fmt::Write as _;

use irr_core::entities::Item;
use irr_export::{CoderExport, Scheme};
use serde::Serialize;

/// Separator written after each comparison block.
pub const BLOCK_SEPARATOR: &str = "****************";

/// Differences between two schemes (and their item lists).
///
/// "first" is coder 1's export, "second" is coder 2's.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SchemeComparison {
    pub ids_identical: bool,
    pub names_identical: bool,
    pub first_id_count: usize,
    pub second_id_count: usize,
    pub first_name_count: usize,
    pub second_name_count: usize,
    pub names_only_in_first: Vec<String>,
    pub names_only_in_second: Vec<String>,
    pub ids_only_in_first: Vec<String>,
    pub ids_only_in_second: Vec<String>,
    pub duplicate_names_first: Vec<String>,
    pub duplicate_names_second: Vec<String>,
    pub duplicate_ids_first: Vec<String>,
    pub duplicate_ids_second: Vec<String>,
    pub items_only_in_first: Vec<String>,
    pub items_only_in_second: Vec<String>,
}

impl SchemeComparison {
    /// Compare two loaded exports.
    #[must_use]
    pub fn between(first: &CoderExport, second: &CoderExport) -> Self {
        Self::compare(&first.scheme, &second.scheme, &first.items, &second.items)
    }

    #[must_use]
    pub fn compare(
        first: &Scheme,
        second: &Scheme,
        first_items: &[Item],
        second_items: &[Item],
    ) -> Self {
        let first_ids = first.ids();
        let second_ids = second.ids();
        let first_names = first.names();
        let second_names = second.names();

        let first_item_ids: Vec<&str> = first_items.iter().map(|i| i.id.as_str()).collect();
        let second_item_ids: Vec<&str> = second_items.iter().map(|i| i.id.as_str()).collect();

        Self {
            ids_identical: first_ids == second_ids,
            names_identical: first_names == second_names,
            first_id_count: first_ids.len(),
            second_id_count: second_ids.len(),
            first_name_count: first_names.len(),
            second_name_count: second_names.len(),
            names_only_in_first: missing_from(&first_names, &second_names),
            names_only_in_second: missing_from(&second_names, &first_names),
            ids_only_in_first: missing_from(&first_ids, &second_ids),
            ids_only_in_second: missing_from(&second_ids, &first_ids),
            duplicate_names_first: repeats(&first_names),
            duplicate_names_second: repeats(&second_names),
            duplicate_ids_first: repeats(&first_ids),
            duplicate_ids_second: repeats(&second_ids),
            items_only_in_first: missing_from(&first_item_ids, &second_item_ids),
            items_only_in_second: missing_from(&second_item_ids, &first_item_ids),
        }
    }

    /// True when both schemes list the same ids and names in the same order.
    #[must_use]
    pub const fn schemes_match(&self) -> bool {
        self.ids_identical && self.names_identical
    }

    /// Render the comparison as one text block for the comparison file.
    #[must_use]
    pub fn render(&self, first_label: &str, second_label: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "Comparing {first_label} and {second_label}:\n\n\
             It is {} that the attribute ids are the same. There are {} ids for review 1 \
             and {} ids for review 2.\n\n\
             There are {} attribute names for review 1 and {} attribute names for review 2.\n\n\
             It is {} that the attribute names are the same.\n\n",
            capitalized(self.ids_identical),
            self.first_id_count,
            self.second_id_count,
            self.first_name_count,
            self.second_name_count,
            capitalized(self.names_identical),
        );

        let sections: [(&str, &[String]); 10] = [
            (
                "The attribute names in codeset 1 but not codeset 2 are",
                &self.names_only_in_first,
            ),
            (
                "The attribute names in codeset 2 but not codeset 1 are",
                &self.names_only_in_second,
            ),
            (
                "The ids in codeset 1 but not codeset 2 are",
                &self.ids_only_in_first,
            ),
            (
                "The ids in codeset 2 but not codeset 1 are",
                &self.ids_only_in_second,
            ),
            (
                "The duplicate names in codeset 1 are",
                &self.duplicate_names_first,
            ),
            (
                "The duplicate names in codeset 2 are",
                &self.duplicate_names_second,
            ),
            (
                "The duplicate ids in codeset 1 are",
                &self.duplicate_ids_first,
            ),
            (
                "The duplicate ids in codeset 2 are",
                &self.duplicate_ids_second,
            ),
            (
                "The item ids in export 1 but not export 2 are",
                &self.items_only_in_first,
            ),
            (
                "The item ids in export 2 but not export 1 are",
                &self.items_only_in_second,
            ),
        ];
        for (heading, values) in sections {
            let _ = write!(out, "{heading}: {}\n\n", values.join(", "));
        }

        out.push_str(BLOCK_SEPARATOR);
        out.push_str("\n\n");
        out
    }
}

const fn capitalized(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Values of `left` that never occur in `right`, in `left` order.
fn missing_from(left: &[&str], right: &[&str]) -> Vec<String> {
    let right: HashSet<&str> = right.iter().copied().collect();
    left.iter()
        .filter(|value| !right.contains(*value))
        .map(ToString::to_string)
        .collect()
}

/// Every occurrence after the first of a repeated value, in document order.
fn repeats(values: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| !seen.insert(**value))
        .map(ToString::to_string)
        .collect()
}
