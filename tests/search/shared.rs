//! `SharedIndex` across threads.

use super::common::shared_sample;
use std::thread;
use typeahead::SharedIndex;

#[test]
fn test_readers_and_writer_see_consistent_index() {
    let shared = shared_sample();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..50 {
                shared.index_document(format!("extra{}", i), "javascript tooling");
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let found = shared.find_suggestions("java", 5);
                    assert_eq!(found, vec!["javascript"]);
                    shared.search("react");
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(shared.stats().documents, 52);
    assert_eq!(shared.with(|index| index.popularity_of("react")), 200);
    assert_eq!(shared.search("tooling").len(), 50);
}

#[test]
fn test_with_groups_operations_under_one_lock() {
    let shared = SharedIndex::default();
    let (suggestions, stats) = shared.with(|index| {
        index.index_document("doc1", "parking lot mutex");
        (index.find_suggestions("mu", 5), index.stats())
    });

    assert_eq!(suggestions, vec!["mutex"]);
    assert_eq!(stats.documents, 1);
    assert_eq!(stats.cached_prefixes, 1);
}
