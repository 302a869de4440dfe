// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How often each literal query has been issued.
//!
//! This is whole-query bookkeeping, separate from term statistics. Queries are
//! keyed by their lowercased text and nothing else: no stemming, no punctuation
//! stripping. "Rust traits" and "rust trait" are different queries.
//!
//! Ranking is count descending; ties go to the query that was first recorded
//! earlier. That order feeds the "nothing typed yet" suggestion list, so it has
//! to be stable between calls.

use crate::util::normalize::lowercase_query;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct PopularityRecord {
    count: u64,
    first_seen: u64,
}

/// Counter of literal queries.
#[derive(Debug, Clone, Default)]
pub struct PopularityTracker {
    records: HashMap<String, PopularityRecord>,
    next_seq: u64,
}

impl PopularityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more issue of `query`. Returns the updated count.
    ///
    /// Blank queries are not tracked and return 0.
    pub fn record(&mut self, query: &str) -> u64 {
        if query.trim().is_empty() {
            return 0;
        }

        let seq = self.next_seq;
        let record = self
            .records
            .entry(lowercase_query(query))
            .or_insert_with(|| PopularityRecord {
                count: 0,
                first_seen: seq,
            });
        if record.first_seen == seq {
            self.next_seq += 1;
        }
        record.count += 1;
        record.count
    }

    /// Times `query` has been recorded, case-insensitively.
    pub fn count_of(&self, query: &str) -> u64 {
        self.records
            .get(&lowercase_query(query))
            .map_or(0, |record| record.count)
    }

    /// The `n` most popular queries, most popular first.
    pub fn top_n(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, &PopularityRecord)> = self.records.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked
            .into_iter()
            .take(n)
            .map(|(query, _)| query.clone())
            .collect()
    }

    /// Number of distinct queries recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
