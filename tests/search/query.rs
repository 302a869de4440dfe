//! `search`: AND semantics, last-term expansion, popularity side effect.

use super::common::{build_test_index, doc_set, sample_index};

#[test]
fn test_search_records_literal_query() {
    let mut index = sample_index();
    index.search("React TypeScript");
    index.search("react typescript");

    assert_eq!(index.popularity_of("react typescript"), 2);
    assert_eq!(index.find_suggestions("", 5), vec!["react typescript"]);
}

#[test]
fn test_queries_without_terms_match_nothing_but_are_recorded() {
    let mut index = sample_index();
    assert!(index.search("a !!").is_empty());
    assert!(index.search("").is_empty());

    assert_eq!(index.popularity_of("a !!"), 1);
    assert_eq!(index.stats().tracked_queries, 1);
}

#[test]
fn test_last_term_expands_to_completions() {
    let mut index = sample_index();
    assert_eq!(index.search("javas"), doc_set(&["doc2"]));
    assert_eq!(index.search("react types"), doc_set(&["doc2"]));
}

#[test]
fn test_leading_terms_must_match_exactly() {
    let mut index = sample_index();
    assert!(index.search("reac typescript").is_empty());
}

#[test]
fn test_query_terms_are_normalized_like_documents() {
    let mut index = sample_index();
    assert_eq!(index.search("Neural Networks!"), doc_set(&["doc1"]));
    assert_eq!(index.search("learning"), doc_set(&["doc1"]));
}

#[test]
fn test_and_across_shared_term() {
    let mut index = build_test_index(&[
        ("a", "rust async runtime"),
        ("b", "rust ownership"),
        ("c", "async python"),
    ]);
    assert_eq!(index.search("rust"), doc_set(&["a", "b"]));
    assert_eq!(index.search("async rust"), doc_set(&["a"]));
    assert_eq!(index.search("python rust"), doc_set(&[]));
}
