// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix tree for completion lookup.
//!
//! Every node owns its children. Edges are single characters, kept in a
//! `BTreeMap` so traversal order (and therefore tie order in suggestion
//! lists) is deterministic.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ONE_TERM_PER_PATH**: a terminal node's root path spells exactly one term
//! 2. **TERMINAL_HAS_DOCS**: `documents` is non-empty whenever `is_end_of_word`
//! 3. **DOCS_DEDUPED**: a document id appears at most once per terminal node

use crate::types::{DocId, DocSet, Term};
use std::collections::BTreeMap;

/// A single node in the prefix tree.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end_of_word: bool,
    frequency: u64,
    documents: DocSet,
}

impl TrieNode {
    /// True if some indexed term ends at this node.
    #[inline]
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Occurrences of the term ending here, duplicates included.
    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Documents that contributed the term ending here.
    #[inline]
    pub fn documents(&self) -> &DocSet {
        &self.documents
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }
}

/// Character trie over normalized terms.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    term_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `term` in `doc_id`.
    ///
    /// Frequency goes up on every call; the document set only grows the first
    /// time a document contributes the term.
    pub fn insert(&mut self, term: &str, doc_id: &DocId) {
        // INVARIANT: ONE_TERM_PER_PATH
        let mut node = &mut self.root;
        for c in term.chars() {
            node = node.children.entry(c).or_default();
        }

        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.term_count += 1;
        }
        node.frequency += 1;

        // INVARIANT: TERMINAL_HAS_DOCS
        // INVARIANT: DOCS_DEDUPED
        if !node.documents.contains(doc_id) {
            node.documents.insert(doc_id.clone());
        }
    }

    /// Walk the character path for `prefix`.
    ///
    /// Returns `None` as soon as a character is missing, so callers can bail out
    /// before allocating a result list. The empty prefix resolves to the root.
    pub fn lookup(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Every term at or below `node`, spelled out from `prefix`.
    ///
    /// Depth-first, children in character order, a node's own term before its
    /// descendants. No limit: truncation is the caller's business, after sorting.
    pub fn collect_completions(node: &TrieNode, prefix: &str) -> Vec<Term> {
        let mut completions = Vec::new();
        let mut path = prefix.to_string();
        collect_into(node, &mut path, &mut completions);
        completions
    }

    /// Completions for a raw prefix, or `None` when no term starts with it.
    pub fn completions(&self, prefix: &str) -> Option<Vec<Term>> {
        self.lookup(prefix)
            .map(|node| Self::collect_completions(node, prefix))
    }

    /// Terminal node for an exact term.
    pub fn get(&self, term: &str) -> Option<&TrieNode> {
        self.lookup(term).filter(|node| node.is_end_of_word)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.term_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }
}

fn collect_into(node: &TrieNode, path: &mut String, out: &mut Vec<Term>) {
    if node.is_end_of_word {
        out.push(path.clone());
    }
    for (c, child) in &node.children {
        path.push(*c);
        collect_into(child, path, out);
        path.pop();
    }
}
