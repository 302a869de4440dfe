//! Memoized suggestions and coarse invalidation.

use super::common::{build_test_index, sample_index};

#[test]
fn test_repeat_lookup_is_served_from_cache() {
    let mut index = sample_index();
    assert_eq!(index.stats().cached_prefixes, 0);

    let first = index.find_suggestions("ne", 5);
    assert_eq!(index.stats().cached_prefixes, 1);
    assert_eq!(index.find_suggestions("ne", 5), first);
    assert_eq!(index.stats().cached_prefixes, 1);
}

#[test]
fn test_empty_results_are_cached() {
    let mut index = sample_index();
    assert!(index.find_suggestions("zzz", 5).is_empty());
    assert_eq!(index.stats().cached_prefixes, 1);
}

#[test]
fn test_indexing_clears_every_prefix() {
    let mut index = sample_index();
    index.find_suggestions("ne", 5);
    index.find_suggestions("ja", 5);
    assert_eq!(index.stats().cached_prefixes, 2);

    index.index_document("doc3", "");
    assert_eq!(index.stats().cached_prefixes, 0);
}

#[test]
fn test_invalidation_surfaces_new_term() {
    let mut index = sample_index();
    assert_eq!(index.find_suggestions("ne", 5), vec!["network", "neural"]);

    index.index_document("doc3", "nebula");
    assert_eq!(
        index.find_suggestions("ne", 5),
        vec!["nebula", "network", "neural"]
    );
}

#[test]
fn test_recording_searches_does_not_invalidate() {
    let mut index = build_test_index(&[("a", "redux render")]);
    assert_eq!(index.find_suggestions("re", 5), vec!["redux", "render"]);

    // Popularity only reorders once the cached list is recomputed.
    index.record_search("render");
    assert_eq!(index.find_suggestions("re", 5), vec!["redux", "render"]);

    index.index_document("b", "");
    assert_eq!(index.find_suggestions("re", 5), vec!["render", "redux"]);
}

#[test]
fn test_different_limit_recomputes() {
    let mut index = build_test_index(&[("a", "cat car car cab cab cab")]);
    assert_eq!(index.find_suggestions("ca", 1), vec!["cab"]);
    assert_eq!(index.find_suggestions("ca", 3), vec!["cab", "car", "cat"]);
}

#[test]
fn test_cache_key_is_lowercased() {
    let mut index = sample_index();
    index.find_suggestions("JA", 5);
    index.find_suggestions("ja", 5);
    assert_eq!(index.stats().cached_prefixes, 1);
}
