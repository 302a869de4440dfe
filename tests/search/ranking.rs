//! Suggestion ordering: frequency, then popularity, then trie order.

use super::common::build_test_index;
use typeahead::SearchIndex;

#[test]
fn test_frequency_orders_completions() {
    let mut index = build_test_index(&[
        ("a", "react redux"),
        ("b", "react"),
        ("c", "react render"),
    ]);
    assert_eq!(index.find_suggestions("re", 5), vec!["react", "redux", "render"]);
    assert_eq!(index.frequency_of("react"), 3);
}

#[test]
fn test_repeated_term_in_one_document_counts_every_occurrence() {
    let mut index = build_test_index(&[("a", "rust rust rust ruby"), ("b", "ruby")]);

    assert_eq!(index.frequency_of("rust"), 3);
    assert_eq!(index.documents_of("rust").len(), 1);
    assert_eq!(index.find_suggestions("ru", 5), vec!["rust", "ruby"]);
}

#[test]
fn test_popularity_breaks_frequency_ties() {
    let mut index = SearchIndex::new();
    index.record_search("Render");
    index.index_document("a", "redux render");

    assert_eq!(index.find_suggestions("re", 5), vec!["render", "redux"]);
}

#[test]
fn test_full_ties_follow_alphabetical_trie_order() {
    let mut index = build_test_index(&[("a", "zebra zeal zen")]);
    assert_eq!(index.find_suggestions("ze", 5), vec!["zeal", "zebra", "zen"]);
}

#[test]
fn test_limit_truncates_after_ranking() {
    let mut index = build_test_index(&[("a", "cat car car cab cab cab")]);

    assert_eq!(index.find_suggestions("ca", 1), vec!["cab"]);
    assert_eq!(index.find_suggestions("ca", 2), vec!["cab", "car"]);
    assert!(index.find_suggestions("ca", 0).is_empty());
}

#[test]
fn test_prefix_is_case_insensitive() {
    let mut index = build_test_index(&[("a", "JavaScript")]);
    assert_eq!(index.find_suggestions("JAVA", 5), vec!["javascript"]);
}

#[test]
fn test_exact_term_is_its_own_completion() {
    let mut index = build_test_index(&[("a", "java javascript")]);
    assert_eq!(index.find_suggestions("java", 5), vec!["java", "javascript"]);
}
