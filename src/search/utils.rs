// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search: multi-term set merging.

use crate::types::DocSet;

/// Merge per-term document sets with AND semantics.
///
/// Documents must appear in every set to survive. Starts from the smallest set
/// and stops early once nothing is left.
///
/// # Returns
///
/// The intersection, or an empty set when `sets` is empty.
pub fn intersect_doc_sets(mut sets: Vec<DocSet>) -> DocSet {
    if sets.is_empty() {
        return DocSet::new();
    }

    sets.sort_by_key(|set| set.len());
    let mut sets = sets.into_iter();
    let mut result = sets.next().unwrap_or_default();

    for set in sets {
        if result.is_empty() {
            break;
        }
        result.retain(|doc_id| set.contains(doc_id));
    }

    result
}
