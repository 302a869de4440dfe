// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus payloads handed to the index by a host.
//!
//! The index itself never touches disk. Hosts that keep their corpus in a JSON
//! file (the CLI does) load it with [`Corpus::from_path`] and feed it to
//! [`crate::SearchIndex::index_corpus`].
//!
//! ```json
//! {
//!   "documents": [
//!     { "id": "doc1", "content": "machine learning artificial intelligence" }
//!   ],
//!   "searches": ["python", "rust"]
//! }
//! ```
//!
//! `searches` is optional and replays past queries into the popularity tracker.

use crate::error::{Error, Result};
use crate::types::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CorpusDocument {
    pub id: DocId,
    pub content: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    pub documents: Vec<CorpusDocument>,
    #[serde(default)]
    pub searches: Vec<String>,
}

impl Corpus {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let corpus: Self = serde_json::from_str(json).map_err(|e| Error::json("corpus", e))?;
        corpus.validate()?;
        Ok(corpus)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let corpus: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::json(path.display().to_string(), e))?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// Ids must be non-blank and unique within one payload.
    ///
    /// Indexing the same id twice is legal on the index itself (it just adds
    /// more occurrences), but inside a single file it is almost always a typo.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (position, doc) in self.documents.iter().enumerate() {
            if doc.id.as_str().trim().is_empty() {
                return Err(Error::InvalidCorpus(format!(
                    "document at position {} has a blank id",
                    position
                )));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(Error::InvalidCorpus(format!(
                    "duplicate document id '{}'",
                    doc.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
