//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use typeahead::{Corpus, SearchIndex, SharedIndex};

// Re-export canonical test utilities from typeahead::testing
pub use typeahead::testing::{build_test_index, doc_set, sample_index, SAMPLE_DOCS};

// ============================================================================
// FIXTURES
// ============================================================================

/// Corpus file contents used by the loading tests.
pub const CORPUS_JSON: &str = r#"{
    "documents": [
        {"id": "doc1", "content": "machine learning artificial intelligence neural networks"},
        {"id": "doc2", "content": "web development javascript react typescript"},
        {"id": "doc3", "content": "react hooks and react native"}
    ],
    "searches": ["react", "React", "javascript"]
}"#;

/// A corpus file in a fresh temp dir. Keep the `TempDir` alive while the
/// path is in use.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}

pub fn fixture_corpus() -> Corpus {
    Corpus::from_json_str(CORPUS_JSON).expect("fixture corpus parses")
}

/// The sample documents behind a shared handle.
pub fn shared_sample() -> SharedIndex {
    SharedIndex::from(sample_index())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// The trie and inverted index must describe the same terms.
pub fn assert_index_well_formed(index: &SearchIndex) {
    assert_eq!(
        index.trie().len(),
        index.inverted().len(),
        "trie and inverted index disagree on term count"
    );
    for (term, entry) in index.inverted().terms() {
        let node = index
            .trie()
            .get(term)
            .unwrap_or_else(|| panic!("'{}' missing from trie", term));
        assert!(node.is_end_of_word(), "'{}' not marked as a word", term);
        assert_eq!(node.frequency(), entry.frequency, "frequency of '{}'", term);
        assert_eq!(node.documents(), &entry.documents, "documents of '{}'", term);
    }
}
