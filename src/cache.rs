// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized suggestion lists, keyed by lowercased prefix.
//!
//! Invalidation is all-or-nothing: the facade calls [`SuggestionCache::clear`]
//! on every `index_document` and at no other time. There is no TTL and no
//! eviction, so the cache grows with the number of distinct prefixes typed.
//! That is fine for a small corpus and a known scaling limit for anything
//! bigger.
//!
//! Each entry remembers the limit it was computed for. A lookup with a
//! different limit is a miss; the caller recomputes and overwrites.

use crate::types::Term;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CachedSuggestions {
    limit: usize,
    terms: Vec<Term>,
}

/// Prefix → ranked, truncated suggestion list.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, CachedSuggestions>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list for `prefix`, if one was stored for this exact `limit`.
    pub fn get(&self, prefix: &str, limit: usize) -> Option<&[Term]> {
        self.entries
            .get(prefix)
            .filter(|cached| cached.limit == limit)
            .map(|cached| cached.terms.as_slice())
    }

    pub fn put(&mut self, prefix: &str, limit: usize, terms: Vec<Term>) {
        self.entries
            .insert(prefix.to_string(), CachedSuggestions { limit, terms });
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached prefixes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
