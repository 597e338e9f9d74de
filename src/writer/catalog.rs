//! Suffix catalog aggregation

use std::collections::BTreeSet;

use super::plugin::FormatWriter;

/// Sorted, deduplicated union of all writers' declared suffixes
///
/// Computed once when the facade is built; a pure function of the
/// loaded writer set.
pub fn suffix_catalog(writers: &[Box<dyn FormatWriter>]) -> Vec<String> {
    writers
        .iter()
        .flat_map(|w| w.suffixes())
        .map(|s| s.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
