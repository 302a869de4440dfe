// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures: the data that makes completion and retrieval fast.
//!
//! Two structures, built from the same normalization pass:
//! - **Trie**: character-by-character paths for prefix completion
//! - **Inverted index**: O(1) term → frequency and document set
//!
//! Both record the same per-term frequency and document set. If they ever
//! disagree, the facade fed them different terms.

mod inverted;
mod trie;

pub use inverted::*;
pub use trie::*;
