//! Corpus and config files into a live index.

mod common;

use common::{doc_set, fixture_corpus, write_fixture, CORPUS_JSON};
use typeahead::{AutocompleteConfig, Corpus, Error, SearchIndex, SharedIndex};

#[test]
fn test_corpus_file_round_trip_into_index() {
    let (_dir, path) = write_fixture("corpus.json", CORPUS_JSON);
    let corpus = Corpus::from_path(&path).unwrap();
    assert_eq!(corpus.len(), 3);

    let shared = SharedIndex::default();
    shared.index_corpus(&corpus);

    assert_eq!(shared.search("react"), doc_set(&["doc2", "doc3"]));
    let stats = shared.stats();
    assert_eq!(stats.documents, 3);
    // Two recorded searches for "react" plus the one just issued.
    assert_eq!(shared.with(|index| index.popularity_of("react")), 3);
    assert_eq!(stats.tracked_queries, 2);
}

#[test]
fn test_replayed_searches_shape_empty_prefix() {
    let mut index = SearchIndex::new();
    index.index_corpus(&fixture_corpus());
    assert_eq!(index.find_suggestions("", 5), vec!["react", "javascript"]);
}

#[test]
fn test_repeated_term_counts_across_documents() {
    let mut index = SearchIndex::new();
    index.index_corpus(&fixture_corpus());

    assert_eq!(index.frequency_of("react"), 3);
    assert_eq!(index.documents_of("react").len(), 2);
    assert_eq!(index.find_suggestions("r", 5), vec!["react"]);
}

#[test]
fn test_malformed_corpus_file() {
    let (_dir, path) = write_fixture("corpus.json", r#"{"documents": [{"id": 1}]}"#);
    let err = Corpus::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("corpus.json"));
}

#[test]
fn test_missing_corpus_file() {
    let (dir, _) = write_fixture("other.json", "{}");
    let err = Corpus::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_config_file() {
    let (_dir, path) = write_fixture(
        "autocomplete.json",
        r#"{"minChars": 2, "maxSuggestions": 8, "debounceMs": 300}"#,
    );
    let config = AutocompleteConfig::from_path(&path).unwrap();
    assert_eq!(config.min_chars, 2);
    assert_eq!(config.max_suggestions, 8);
    assert_eq!(config.debounce_ms, 300);
}

#[test]
fn test_invalid_config_file() {
    let (_dir, path) = write_fixture("autocomplete.json", r#"{"maxSuggestions": 0}"#);
    assert!(matches!(
        AutocompleteConfig::from_path(&path),
        Err(Error::InvalidConfig(_))
    ));
}
