//! Recursive deep merge of attribute trees.
//!
//! Mappings present on both sides merge key by key. Anything else on the
//! overlay side replaces the base value outright, so lists are swapped
//! wholesale rather than concatenated or merged by index.

use crate::types::{AttributeTree, AttributeValue};

/// Merge `overlay` on top of `base`, returning the combined tree.
///
/// Keys already in `base` keep their position; keys only in `overlay` are
/// appended in overlay order.
pub fn merge_trees(mut base: AttributeTree, overlay: AttributeTree) -> AttributeTree {
    for (key, incoming) in overlay {
        match base.get_mut(&key) {
            Some(slot) => {
                let existing = std::mem::take(slot);
                *slot = merge_values(existing, incoming);
            }
            None => {
                base.insert(key, incoming);
            }
        }
    }
    base
}

/// Merge a single pair of values; `incoming` wins unless both are mappings.
pub fn merge_values(existing: AttributeValue, incoming: AttributeValue) -> AttributeValue {
    match (existing, incoming) {
        (AttributeValue::Map(existing), AttributeValue::Map(incoming)) => {
            AttributeValue::Map(merge_trees(existing, incoming))
        }
        (_, incoming) => incoming,
    }
}

impl AttributeTree {
    /// Borrowing form of [`merge_trees`]: `self` is the base, `overlay` wins.
    pub fn merged_with(&self, overlay: &AttributeTree) -> AttributeTree {
        merge_trees(self.clone(), overlay.clone())
    }
}
