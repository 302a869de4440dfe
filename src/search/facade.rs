// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The single entry point over trie, inverted index, popularity and cache.
//!
//! # Operations
//!
//! | Operation          | Reads                        | Writes                 |
//! |--------------------|------------------------------|------------------------|
//! | `index_document`   | -                            | trie, inverted, cache (cleared) |
//! | `find_suggestions` | cache, trie, inverted, popularity | cache             |
//! | `search`           | inverted, trie (via suggestions) | popularity, cache  |
//! | `record_search`    | -                            | popularity             |
//!
//! `find_suggestions` takes `&mut self` because a miss writes the cache. For
//! sharing across threads, wrap the index in [`super::SharedIndex`].

use super::ranking::rank_suggestions;
use super::utils::intersect_doc_sets;
use crate::cache::SuggestionCache;
use crate::corpus::Corpus;
use crate::index::{InvertedIndex, Trie};
use crate::popularity::PopularityTracker;
use crate::types::{DocId, DocSet, IndexStats, Term};
use crate::util::normalize::{lowercase_query, normalize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// How many completions of the final query term are folded into `search`.
pub const PREFIX_EXPANSION_LIMIT: usize = 10;

/// In-memory completion and retrieval index.
///
/// Explicitly constructed and owned. Hosts that need one index behind several
/// search boxes share it through [`super::SharedIndex`].
#[derive(Debug, Default)]
pub struct SearchIndex {
    trie: Trie,
    inverted: InvertedIndex,
    popularity: PopularityTracker,
    cache: SuggestionCache,
    documents: HashSet<DocId>,
    occurrences: u64,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `content` and record every term against `doc_id`.
    ///
    /// Clears the whole suggestion cache afterwards, even if `content` produced
    /// no terms.
    pub fn index_document(&mut self, doc_id: impl Into<DocId>, content: &str) {
        let doc_id = doc_id.into();
        let terms = normalize(content);

        for term in &terms {
            self.trie.insert(term, &doc_id);
            self.inverted.add_occurrence(term, &doc_id);
        }
        self.occurrences += terms.len() as u64;

        debug!(
            doc_id = %doc_id,
            terms = terms.len(),
            cached_prefixes = self.cache.len(),
            "indexed document, clearing suggestion cache"
        );
        self.documents.insert(doc_id);
        self.cache.clear();
    }

    /// Index every document of `corpus`, then replay its recorded searches.
    pub fn index_corpus(&mut self, corpus: &Corpus) {
        for doc in &corpus.documents {
            self.index_document(doc.id.clone(), &doc.content);
        }
        for query in &corpus.searches {
            self.record_search(query);
        }
    }

    /// Ranked completions for `prefix`, at most `limit` of them.
    ///
    /// An empty prefix returns the most popular literal queries instead of
    /// terms. Otherwise the lowercased prefix is looked up in the cache first;
    /// on a miss (including a hit computed for a different `limit`) the
    /// completions are collected, ranked, truncated and cached, empty lists
    /// included.
    pub fn find_suggestions(&mut self, prefix: &str, limit: usize) -> Vec<Term> {
        if prefix.is_empty() {
            return self.popularity.top_n(limit);
        }

        let key = lowercase_query(prefix);
        if let Some(cached) = self.cache.get(&key, limit) {
            trace!(prefix = %key, limit, "suggestion cache hit");
            return cached.to_vec();
        }

        let suggestions = match self.trie.lookup(&key) {
            None => Vec::new(),
            Some(node) => {
                let mut completions = Trie::collect_completions(node, &key);
                rank_suggestions(&mut completions, &self.inverted, &self.popularity);
                completions.truncate(limit);
                completions
            }
        };

        trace!(
            prefix = %key,
            limit,
            found = suggestions.len(),
            "suggestion cache miss"
        );
        self.cache.put(&key, limit, suggestions.clone());
        suggestions
    }

    /// Documents matching every term of `query`.
    ///
    /// Records `query` in the popularity tracker first. All terms but the last
    /// must match exactly; the last also matches through its top
    /// [`PREFIX_EXPANSION_LIMIT`] completions, so a half-typed final word
    /// still finds documents.
    pub fn search(&mut self, query: &str) -> DocSet {
        self.popularity.record(query);

        let terms = normalize(query);
        let Some((last, leading)) = terms.split_last() else {
            debug!(query, "query normalized to no terms");
            return DocSet::new();
        };

        let mut per_term: Vec<DocSet> = leading
            .iter()
            .map(|term| self.inverted.documents_of(term).clone())
            .collect();

        let mut expanded = self.inverted.documents_of(last).clone();
        for completion in self.find_suggestions(last, PREFIX_EXPANSION_LIMIT) {
            expanded.extend(self.inverted.documents_of(&completion).iter().cloned());
        }
        per_term.push(expanded);

        let result = intersect_doc_sets(per_term);
        debug!(query, terms = terms.len(), matches = result.len(), "search");
        result
    }

    /// Count `query` as issued without touching the document index.
    pub fn record_search(&mut self, query: &str) {
        let count = self.popularity.record(query);
        trace!(query, count, "recorded search");
    }

    /// Total occurrences of an exact term.
    pub fn frequency_of(&self, term: &str) -> u64 {
        self.inverted.frequency_of(term)
    }

    /// Documents containing an exact term.
    pub fn documents_of(&self, term: &str) -> &DocSet {
        self.inverted.documents_of(term)
    }

    /// Times a literal query was recorded, case-insensitively.
    pub fn popularity_of(&self, query: &str) -> u64 {
        self.popularity.count_of(query)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            terms: self.inverted.len(),
            occurrences: self.occurrences,
            cached_prefixes: self.cache.len(),
            tracked_queries: self.popularity.len(),
        }
    }
}
