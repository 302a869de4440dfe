//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::search::SearchIndex;
use crate::types::{DocId, DocSet};

/// The two-document corpus most behavioural tests start from.
pub const SAMPLE_DOCS: &[(&str, &str)] = &[
    (
        "doc1",
        "machine learning artificial intelligence neural networks",
    ),
    ("doc2", "web development javascript react typescript"),
];

/// Build an index from `(id, content)` pairs, in order.
pub fn build_test_index(docs: &[(&str, &str)]) -> SearchIndex {
    let mut index = SearchIndex::new();
    for (id, content) in docs {
        index.index_document(*id, content);
    }
    index
}

/// Build an index over [`SAMPLE_DOCS`].
pub fn sample_index() -> SearchIndex {
    build_test_index(SAMPLE_DOCS)
}

/// Document set from string ids.
pub fn doc_set(ids: &[&str]) -> DocSet {
    ids.iter().map(|id| DocId::from(*id)).collect()
}
