// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion ranking: how completions get ordered before truncation.
//!
//! Sort order:
//! 1. **Term frequency** across the whole index, descending
//! 2. **Query popularity** of the literal term, descending
//! 3. **Traversal order**: the sort is stable, so remaining ties keep the
//!    trie's depth-first, character-ordered sequence
//!
//! There is no relevance model beyond these two counters.

use crate::index::InvertedIndex;
use crate::popularity::PopularityTracker;
use crate::types::Term;
use std::cmp::Reverse;

/// Sort `completions` in place, best first.
pub fn rank_suggestions(
    completions: &mut [Term],
    inverted: &InvertedIndex,
    popularity: &PopularityTracker,
) {
    completions.sort_by_cached_key(|term| {
        (
            Reverse(inverted.frequency_of(term)),
            Reverse(popularity.count_of(term)),
        )
    });
}
