//! Tag list diffing.
//!
//! The whole service boils down to [`diff_fields`]: split two
//! whitespace-separated tag lists, deduplicate, and report which tags the
//! new list dropped and which it picked up.

use std::collections::HashSet;

/// Result of diffing two tag lists.
///
/// Both vectors are free of duplicates and keep the order in which each tag
/// first appears in its source list. Empty vectors mean "no difference" —
/// there is no separate sentinel for that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Tags present in the old list but absent from the new one.
    pub removed: Vec<String>,
    /// Tags present in the new list but absent from the old one.
    pub added: Vec<String>,
}

impl TagDiff {
    /// True when the two lists contain the same set of tags.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Split `input` on whitespace and drop repeated tags, keeping first-seen order.
///
/// Any run of whitespace separates tags; leading/trailing whitespace is
/// ignored, so an empty or whitespace-only string yields no tags.
pub fn unique_fields(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split_whitespace()
        .filter(|tag| seen.insert(*tag))
        .map(str::to_owned)
        .collect()
}

/// Compare two whitespace-separated tag lists.
///
/// `removed` holds the tags of `old` that no longer appear in `new`;
/// `added` holds the tags of `new` that did not appear in `old`.
/// Comparison is exact string equality — no case folding, no trimming
/// beyond the whitespace split. Total over all inputs, including empty
/// strings.
pub fn diff_fields(old: &str, new: &str) -> TagDiff {
    let old_tags = unique_fields(old);
    let new_tags = unique_fields(new);

    let old_set: HashSet<&str> = old_tags.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new_tags.iter().map(String::as_str).collect();

    let removed = old_tags
        .iter()
        .filter(|tag| !new_set.contains(tag.as_str()))
        .cloned()
        .collect();
    let added = new_tags
        .iter()
        .filter(|tag| !old_set.contains(tag.as_str()))
        .cloned()
        .collect();

    TagDiff { removed, added }
}
