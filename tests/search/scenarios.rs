//! End-to-end scenarios over the sample corpus.

use super::common::{assert_index_well_formed, build_test_index, doc_set, sample_index};
use typeahead::SearchIndex;

const DOC1: &str = "machine learning artificial intelligence neural networks";

#[test]
fn test_single_document_completion() {
    let mut index = build_test_index(&[("doc1", DOC1)]);
    assert_eq!(index.find_suggestions("ma", 5), vec!["machine"]);
    assert_index_well_formed(&index);
}

#[test]
fn test_second_document_completion() {
    let mut index = sample_index();
    assert_eq!(index.find_suggestions("java", 5), vec!["javascript"]);
}

#[test]
fn test_multi_term_and() {
    let mut index = sample_index();
    assert_eq!(index.search("react typescript"), doc_set(&["doc2"]));
}

#[test]
fn test_unknown_term_matches_nothing() {
    let mut index = build_test_index(&[("doc1", DOC1)]);
    assert!(index.search("nonexistentterm").is_empty());
}

#[test]
fn test_empty_prefix_returns_popular_queries() {
    let mut index = SearchIndex::new();
    index.record_search("Python");
    index.record_search("python");
    assert_eq!(index.find_suggestions("", 1), vec!["python"]);
}

#[test]
fn test_stemmed_terms_are_what_gets_completed() {
    let mut index = build_test_index(&[("doc1", DOC1)]);

    // "learning" is stored as "learn", "networks" as "network".
    assert_eq!(index.find_suggestions("lear", 5), vec!["learn"]);
    assert_eq!(index.find_suggestions("netw", 5), vec!["network"]);
    assert!(index.find_suggestions("learni", 5).is_empty());
}

#[test]
fn test_terms_across_documents_do_not_match_together() {
    let mut index = sample_index();
    assert!(index.search("machine javascript").is_empty());
    assert_eq!(index.search("machine neural"), doc_set(&["doc1"]));
}

#[test]
fn test_new_document_is_searchable_immediately() {
    let mut index = sample_index();
    assert!(index.search("quantum").is_empty());

    index.index_document("doc3", "quantum computing");
    assert_eq!(index.search("quantum"), doc_set(&["doc3"]));
    assert_eq!(index.find_suggestions("qu", 5), vec!["quantum"]);
    assert_index_well_formed(&index);
}
