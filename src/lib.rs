//! In-memory prefix autocompletion and exact-term retrieval for search boxes.
//!
//! This crate keeps a small, mutable corpus in memory and answers three kinds of
//! question fast enough to run on every keystroke: which terms start with what
//! the user typed, which documents contain every query term, and which queries
//! people ask most.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────────┐
//! │ util::       │───▶│ index::Trie  │───▶│                   │
//! │ normalize    │    ├──────────────┤    │  search::         │
//! │ (terms)      │───▶│ index::      │───▶│  SearchIndex      │──▶ SharedIndex
//! └──────────────┘    │ InvertedIndex│    │  (facade)         │        │
//!                     └──────────────┘    │                   │        ▼
//!        ┌────────────────────┐           │                   │  autocomplete::
//!        │ PopularityTracker  │──────────▶│                   │  AutocompleteController
//!        │ SuggestionCache    │◀─────────▶│                   │  (debounced input)
//!        └────────────────────┘           └───────────────────┘
//! ```
//!
//! | Module         | Responsibility                                   |
//! |----------------|--------------------------------------------------|
//! | `util`         | Raw text → terms (lowercase, strip, crude stem)  |
//! | `index`        | Trie for completion, inverted index for lookup   |
//! | `popularity`   | Literal query counts                             |
//! | `cache`        | Prefix → ranked suggestion list                  |
//! | `search`       | The facade and its thread-safe handle            |
//! | `autocomplete` | Debounce, dropdown state, keyboard commands      |
//!
//! # Usage
//!
//! ```
//! use typeahead::SearchIndex;
//!
//! let mut index = SearchIndex::new();
//! index.index_document("doc1", "machine learning artificial intelligence");
//! index.index_document("doc2", "web development javascript react typescript");
//!
//! assert_eq!(index.find_suggestions("java", 5), vec!["javascript"]);
//! assert!(index.search("react typescript").contains("doc2"));
//! ```

pub mod autocomplete;
pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod popularity;
pub mod search;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use autocomplete::{
    AutocompleteController, AutocompleteState, Commit, CommitSource, DebounceTicket, Key,
    SuggestionProvider,
};
pub use cache::SuggestionCache;
pub use config::AutocompleteConfig;
pub use corpus::{Corpus, CorpusDocument};
pub use error::{Error, Result};
pub use index::{InvertedEntry, InvertedIndex, Trie, TrieNode};
pub use popularity::PopularityTracker;
pub use search::{SearchIndex, SharedIndex, PREFIX_EXPANSION_LIMIT};
pub use types::{DocId, DocSet, IndexStats, Term};
pub use util::normalize::normalize;
