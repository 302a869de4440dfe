// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by every index structure.
//!
//! # Invariants
//!
//! - **Term**: lowercase, only word characters, suffix-stripped, more than one
//!   character long. Anything else never reaches the trie or the inverted index.
//!
//! - **DocSet**: deduplicated and ordered. A document that mentions a term twice
//!   still appears once in that term's set.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// A normalized token produced by [`crate::normalize`].
pub type Term = String;

/// Deduplicated, ordered set of document identifiers.
pub type DocSet = BTreeSet<DocId>;

/// Caller-assigned document identifier.
///
/// The index never invents ids; the host hands them in with the content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of how much the facade is holding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Distinct document ids seen by `index_document`.
    pub documents: usize,
    /// Distinct terms in the index.
    pub terms: usize,
    /// Total term occurrences indexed, duplicates included.
    pub occurrences: u64,
    /// Prefixes with a memoized suggestion list.
    pub cached_prefixes: usize,
    /// Distinct literal queries recorded.
    pub tracked_queries: usize,
}
