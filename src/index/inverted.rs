// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index: term → (frequency, documents).
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **FREQ_COUNTS_OCCURRENCES**: `frequency` is the number of `add_occurrence`
//!    calls for the term, duplicates within a document included
//! 2. **DOCS_DEDUPED**: each document id appears once per term
//! 3. **NON_EMPTY**: every stored entry has at least one document

use crate::types::{DocId, DocSet, Term};
use std::collections::HashMap;
use std::sync::LazyLock;

static EMPTY_DOCS: LazyLock<DocSet> = LazyLock::new(DocSet::new);

/// Per-term statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedEntry {
    pub frequency: u64,
    pub documents: DocSet,
}

/// Exact-match term lookup.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<Term, InvertedEntry>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `term` in `doc_id`.
    pub fn add_occurrence(&mut self, term: &str, doc_id: &DocId) {
        // INVARIANT: NON_EMPTY
        let entry = self.terms.entry(term.to_string()).or_default();

        // INVARIANT: FREQ_COUNTS_OCCURRENCES
        entry.frequency += 1;
        // INVARIANT: DOCS_DEDUPED
        if !entry.documents.contains(doc_id) {
            entry.documents.insert(doc_id.clone());
        }
    }

    /// Total occurrences of `term`; 0 if it was never indexed.
    pub fn frequency_of(&self, term: &str) -> u64 {
        self.terms.get(term).map_or(0, |entry| entry.frequency)
    }

    /// Documents containing `term`; empty if it was never indexed.
    pub fn documents_of(&self, term: &str) -> &DocSet {
        self.terms
            .get(term)
            .map_or(&*EMPTY_DOCS, |entry| &entry.documents)
    }

    pub fn entry(&self, term: &str) -> Option<&InvertedEntry> {
        self.terms.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &InvertedEntry)> {
        self.terms.iter().map(|(term, entry)| (term.as_str(), entry))
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
