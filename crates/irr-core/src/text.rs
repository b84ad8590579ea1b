//! Sentinels, comma escaping and excerpt cleaning.
//!
//! The comparison tables are written as plain comma-separated lines, so any
//! comma that originates from the export is replaced by a placeholder before a
//! line is assembled. Names use [`NAME_COMMA_ESCAPE`] (restored when the
//! results file is written); excerpt text uses [`TEXT_COMMA_ESCAPE`].

/// Placeholder for commas in ids, attribute names, arm names and short titles.
pub const NAME_COMMA_ESCAPE: &str = ";;;;";

/// Placeholder for commas inside excerpt text.
pub const TEXT_COMMA_ESCAPE: &str = "####*";

/// Display name for the empty arm.
pub const WHOLE_STUDY: &str = "Whole Study";

/// Text cell for a coder who did not annotate an (item, attribute, arm).
pub const NOTHING_CODED: &str = "nothing coded";

/// Text cell for a coder who ticked an attribute without selecting text.
pub const TICKED_NO_VALUE: &str = "code ticked with no value";

/// Separator between several cleaned excerpts in one text cell.
pub const EXCERPT_SEPARATOR: &str = ";";

const START_MARKER: &str = "[¬s]";
const END_MARKER: &str = "[¬e]";
const PAGE_MARKER_CHARS: &[char] = &['P', 'a', 'g', 'e'];
const ARTIFACT_PREFIX_CHARS: usize = 3;

/// Make a name or id safe for one table field.
///
/// Line breaks are dropped and every comma becomes [`NAME_COMMA_ESCAPE`].
#[must_use]
pub fn escape_name(name: &str) -> String {
    name.replace(['\n', '\r'], "")
        .replace(',', NAME_COMMA_ESCAPE)
}

/// Put the commas [`escape_name`] replaced back. Dropped line breaks stay dropped.
#[must_use]
pub fn restore_name(name: &str) -> String {
    name.replace(NAME_COMMA_ESCAPE, ",")
}

/// Display form of an arm name: the empty arm covers the whole study.
#[must_use]
pub fn display_arm(arm: &str) -> &str {
    if arm.is_empty() { WHOLE_STUDY } else { arm }
}

/// Clean one raw excerpt for the text table.
///
/// Order matters and follows the export format: newlines go first, commas are
/// protected, the leading `Page` run is stripped character-wise, the selection
/// markers are removed, and finally the three-character location artifact
/// (e.g. ` 1:`) is dropped.
#[must_use]
pub fn clean_excerpt(text: &str) -> String {
    let protected = text.replace('\n', "").replace(',', TEXT_COMMA_ESCAPE);
    let unpaged = protected.trim_start_matches(PAGE_MARKER_CHARS);
    let unmarked = unpaged.replace(END_MARKER, "").replace(START_MARKER, "");
    unmarked.chars().skip(ARTIFACT_PREFIX_CHARS).collect()
}

/// Clean and join several excerpts into one text cell.
#[must_use]
pub fn join_excerpts<S: AsRef<str>>(excerpts: &[S]) -> String {
    excerpts
        .iter()
        .map(|excerpt| clean_excerpt(excerpt.as_ref()))
        .collect::<Vec<_>>()
        .join(EXCERPT_SEPARATOR)
}
