// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Everything that turns raw text into index terms lives here. The trie, the
//! inverted index and the popularity tracker all key off what these functions
//! produce, so a change here changes what matches what.

pub mod normalize;
