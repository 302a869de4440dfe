// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One index, many search boxes.
//!
//! The trie, inverted index and cache are not built for concurrent mutation,
//! and even `find_suggestions` writes the cache. `SharedIndex` puts the whole
//! facade behind one mutex so every call runs to completion before the next
//! starts. Clones share the same index.

use super::facade::SearchIndex;
use crate::corpus::Corpus;
use crate::types::{DocId, DocSet, IndexStats, Term};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<Mutex<SearchIndex>>,
}

impl SharedIndex {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    pub fn index_document(&self, doc_id: impl Into<DocId>, content: &str) {
        self.inner.lock().index_document(doc_id, content);
    }

    pub fn index_corpus(&self, corpus: &Corpus) {
        self.inner.lock().index_corpus(corpus);
    }

    pub fn find_suggestions(&self, prefix: &str, limit: usize) -> Vec<Term> {
        self.inner.lock().find_suggestions(prefix, limit)
    }

    pub fn search(&self, query: &str) -> DocSet {
        self.inner.lock().search(query)
    }

    pub fn record_search(&self, query: &str) {
        self.inner.lock().record_search(query);
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.lock().stats()
    }

    /// Run several operations under a single lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut SearchIndex) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<SearchIndex> for SharedIndex {
    fn from(index: SearchIndex) -> Self {
        Self::new(index)
    }
}
