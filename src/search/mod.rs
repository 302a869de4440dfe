// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the index structures meet their callers.
//!
//! Everything culminates here. The facade owns the trie, inverted index,
//! popularity tracker and suggestion cache, and exposes the four operations a
//! search box needs: index, suggest, search, record.

mod facade;
pub mod ranking;
mod shared;
pub mod utils;

pub use facade::*;
pub use shared::*;
