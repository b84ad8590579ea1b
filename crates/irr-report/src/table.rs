//! Comparison tables: one row per (item, attribute, arm).
//!
//! Coder 1's item list and scheme define the universe of rows. For each
//! (item, attribute) the arms are the union of both coders' arms, coder 1's
//! first. A pair neither coder touched still gets a single `Whole Study` row.

use std::collections::HashSet;

use irr_core::entities::{ArmMap, CoderAnnotations, CoderCell, ComparisonRow, Item};
use irr_core::text::{WHOLE_STUDY, display_arm, escape_name};
use irr_export::{CoderExport, Scheme};

/// Header shared by the binary and text tables.
pub const HEADER: &str = "paperID,shortTitle,AttributeId,AttributeTitle,ArmTitle,Coder1Text,Coder2Text";

/// Rows for one export pair plus what had to be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
    /// Coder 2 (item, attribute) codes outside coder 1's items or scheme.
    pub skipped_foreign: usize,
    /// Coder 1 items with no record at all in coder 2's export.
    pub missing_in_coder2: usize,
}

impl ComparisonTable {
    /// Build the table for one export pair, coder 1 being authoritative.
    #[must_use]
    pub fn between(coder1: &CoderExport, coder2: &CoderExport) -> Self {
        Self::build(
            &coder1.scheme,
            &coder1.items,
            &coder1.annotations,
            &coder2.annotations,
        )
    }

    #[must_use]
    pub fn build(
        scheme: &Scheme,
        items: &[Item],
        coder1: &CoderAnnotations,
        coder2: &CoderAnnotations,
    ) -> Self {
        let skipped_foreign = count_foreign(scheme, items, coder2);
        let mut missing_in_coder2 = 0;
        let mut rows = Vec::with_capacity(items.len() * scheme.len());

        for item in items {
            if !coder2.contains_item(&item.id) {
                missing_in_coder2 += 1;
                tracing::warn!(item = %item.id, "item missing from coder 2 export; treating as uncoded");
            }
            let short_title = escape_name(&item.short_title);

            for attribute in scheme.attributes() {
                let arms1 = coder1.arms(&item.id, &attribute.id);
                let arms2 = coder2.arms(&item.id, &attribute.id);
                let row = |arm: &str, coder1: CoderCell, coder2: CoderCell| ComparisonRow {
                    item_id: item.id.clone(),
                    short_title: short_title.clone(),
                    attribute_id: attribute.id.clone(),
                    attribute_name: attribute.name.clone(),
                    arm: arm.to_string(),
                    coder1,
                    coder2,
                };

                let arms = arm_union(arms1, arms2);
                if arms.is_empty() {
                    rows.push(row(WHOLE_STUDY, CoderCell::NothingCoded, CoderCell::NothingCoded));
                    continue;
                }
                for arm in arms {
                    rows.push(row(
                        display_arm(arm),
                        CoderCell::resolve(arms1.and_then(|m| m.get(arm))),
                        CoderCell::resolve(arms2.and_then(|m| m.get(arm))),
                    ));
                }
            }
        }

        tracing::debug!(rows = rows.len(), skipped_foreign, "built comparison table");
        Self {
            rows,
            skipped_foreign,
            missing_in_coder2,
        }
    }

    /// Header-less binary lines, each terminated by `\n`.
    #[must_use]
    pub fn binary_lines(&self) -> String {
        self.lines(|cell| cell.presence().to_string())
    }

    /// Header-less text lines, each terminated by `\n`.
    #[must_use]
    pub fn text_lines(&self) -> String {
        self.lines(|cell| cell.text().to_string())
    }

    fn lines(&self, render: impl Fn(&CoderCell) -> String) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let coder1 = render(&row.coder1);
            let coder2 = render(&row.coder2);
            let fields: [&str; 7] = [
                &row.item_id,
                &row.short_title,
                &row.attribute_id,
                &row.attribute_name,
                &row.arm,
                &coder1,
                &coder2,
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        out
    }
}

/// Arm names from coder 1, then coder 2's arms coder 1 did not use.
fn arm_union<'a>(first: Option<&'a ArmMap>, second: Option<&'a ArmMap>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    first
        .into_iter()
        .chain(second)
        .flat_map(|arms| arms.keys())
        .map(String::as_str)
        .filter(|arm| seen.insert(*arm))
        .collect()
}

/// Count coder 2's (item, attribute) codes that fall outside coder 1's universe.
fn count_foreign(scheme: &Scheme, items: &[Item], coder2: &CoderAnnotations) -> usize {
    let item_ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    let attribute_ids: HashSet<&str> = scheme.ids().into_iter().collect();
    let mut skipped = 0;

    for (item_id, attributes) in coder2.items() {
        if !item_ids.contains(item_id.as_str()) {
            if !attributes.is_empty() {
                tracing::warn!(
                    item = %item_id,
                    codes = attributes.len(),
                    "coder 2 coded an item absent from coder 1's references; skipping"
                );
            }
            skipped += attributes.len();
            continue;
        }
        for attribute_id in attributes.keys() {
            if !attribute_ids.contains(attribute_id.as_str()) {
                tracing::warn!(
                    item = %item_id,
                    attribute = %attribute_id,
                    "coder 2 used an attribute absent from coder 1's scheme; skipping"
                );
                skipped += 1;
            }
        }
    }
    skipped
}

#[cfg(test)]
mod tests {
    use irr_core::entities::{Attribute, Presence};
    use pretty_assertions::assert_eq;

    use super::*;

    fn scheme(ids: &[(&str, &str)]) -> Scheme {
        Scheme::from_attributes(ids.iter().map(|(id, n)| Attribute::new(*id, *n)).collect())
    }

    fn two_item_fixture() -> (Scheme, Vec<Item>, CoderAnnotations, CoderAnnotations) {
        let scheme = scheme(&[("A", "nameA"), ("B", "nameB")]);
        let items = vec![Item::new("item1", "titleX"), Item::new("item2", "titleY")];

        let mut c1 = CoderAnnotations::new();
        c1.ensure_item("item1");
        c1.ensure_item("item2");
        c1.add_excerpt("item1", "A", "", "Page1[¬s]Hello[¬e]".into());
        c1.add_tick("item2", "A", "Control");

        let mut c2 = CoderAnnotations::new();
        c2.ensure_item("item1");
        c2.ensure_item("item2");
        c2.add_tick("item2", "A", "Intervention");
        c2.add_tick("item2", "A", "Control");

        (scheme, items, c1, c2)
    }

    #[test]
    fn single_coder_tick_yields_one_zero_row() {
        let (scheme, items, c1, c2) = two_item_fixture();
        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);

        let first = &table.rows[0];
        assert_eq!(first.arm, "Whole Study");
        assert_eq!(first.coder1.presence(), Presence::Present);
        assert_eq!(first.coder2.presence(), Presence::Absent);
        assert!(
            table
                .binary_lines()
                .starts_with("item1,titleX,A,nameA,Whole Study,1,0\n")
        );
        assert!(
            table
                .text_lines()
                .starts_with("item1,titleX,A,nameA,Whole Study,llo,nothing coded\n")
        );
    }

    #[test]
    fn row_count_equals_arm_union_or_one() {
        let (scheme, items, c1, c2) = two_item_fixture();
        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);

        let count = |item: &str, attr: &str| {
            table
                .rows
                .iter()
                .filter(|r| r.item_id == item && r.attribute_id == attr)
                .count()
        };
        assert_eq!(count("item1", "A"), 1);
        assert_eq!(count("item1", "B"), 1);
        assert_eq!(count("item2", "A"), 2);
        assert_eq!(count("item2", "B"), 1);
        assert_eq!(table.rows.len(), 5);
    }

    #[test]
    fn arm_union_puts_coder1_arms_first() {
        let (scheme, items, c1, c2) = two_item_fixture();
        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);

        let arms: Vec<(&str, u32, u32)> = table
            .rows
            .iter()
            .filter(|r| r.item_id == "item2" && r.attribute_id == "A")
            .map(|r| {
                (
                    r.arm.as_str(),
                    r.coder1.presence().as_flag(),
                    r.coder2.presence().as_flag(),
                )
            })
            .collect();
        assert_eq!(arms, vec![("Control", 1, 1), ("Intervention", 0, 1)]);
    }

    #[test]
    fn uncoded_pair_gets_nothing_coded_row() {
        let (scheme, items, c1, c2) = two_item_fixture();
        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);
        let lines = table.text_lines();
        assert!(lines.contains("item1,titleX,B,nameB,Whole Study,nothing coded,nothing coded\n"));
    }

    #[test]
    fn every_line_has_seven_fields() {
        let scheme = scheme(&[("A", "Age;;;; years")]);
        let items = vec![Item::new("1", "Smith, Jones (2020)")];
        let mut c1 = CoderAnnotations::new();
        c1.add_excerpt("1", "A", "Arm;;;; one", "Page 2:\n[¬s]a, b, c[¬e]".into());
        c1.add_excerpt("1", "A", "Arm;;;; one", "Page 3:\n[¬s]d[¬e]".into());
        let c2 = CoderAnnotations::new();

        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);
        for line in table.text_lines().lines().chain(table.binary_lines().lines()) {
            assert_eq!(line.split(',').count(), 7, "line: {line}");
        }
        assert_eq!(
            table.text_lines(),
            "1,Smith;;;; Jones (2020),A,Age;;;; years,Arm;;;; one,a####* b####* c;d,nothing coded\n"
        );
        assert_eq!(table.missing_in_coder2, 1);
    }

    #[test]
    fn foreign_coder2_codes_are_skipped() {
        let scheme = scheme(&[("A", "nameA")]);
        let items = vec![Item::new("1", "t")];
        let mut c1 = CoderAnnotations::new();
        c1.ensure_item("1");
        let mut c2 = CoderAnnotations::new();
        c2.add_tick("1", "Z", "");
        c2.add_tick("99", "A", "");

        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);
        assert_eq!(table.skipped_foreign, 2);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.binary_lines(), "1,t,A,nameA,Whole Study,0,0\n");
    }

    #[test]
    fn presence_is_one_iff_annotated() {
        let (scheme, items, c1, c2) = two_item_fixture();
        let table = ComparisonTable::build(&scheme, &items, &c1, &c2);
        for row in &table.rows {
            let arm_key = if row.arm == WHOLE_STUDY { "" } else { row.arm.as_str() };
            let has1 = c1
                .arms(&row.item_id, &row.attribute_id)
                .is_some_and(|m| m.contains_key(arm_key));
            let has2 = c2
                .arms(&row.item_id, &row.attribute_id)
                .is_some_and(|m| m.contains_key(arm_key));
            assert_eq!(row.coder1.presence().is_present(), has1);
            assert_eq!(row.coder2.presence().is_present(), has2);
        }
    }
}
