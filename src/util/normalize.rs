// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: raw text in, index terms out.
//!
//! # Algorithm
//!
//! 1. Lowercase
//! 2. Drop every character that is neither a word character (alphanumeric or `_`)
//!    nor whitespace
//! 3. Split on runs of whitespace
//! 4. Strip one trailing suffix from [`SUFFIXES`]
//! 5. Discard tokens of one character or less
//!
//! The stemmer is deliberately crude. Step 4 behaves like the alternation
//! `(s|es|ing|ed|ly)$`: the match that starts earliest in the word wins, so
//! `classes` loses `es` and not just `s`. A real stemmer would produce different
//! terms and therefore different prefix matches; don't swap one in.
//!
//! Duplicates survive normalization. Term frequency counting depends on it.

/// Suffixes removed by the stemmer, in alternation order.
pub const SUFFIXES: [&str; 5] = ["s", "es", "ing", "ed", "ly"];

/// Tokens with this many characters or fewer are dropped.
pub const MIN_TERM_CHARS: usize = 1;

/// Normalize raw text into an ordered sequence of index terms.
///
/// Never fails. Empty input, or input made only of punctuation, yields an
/// empty vector.
///
/// # Example
///
/// ```
/// use typeahead::normalize;
///
/// assert_eq!(normalize("Running, jumped!"), vec!["runn", "jump"]);
/// assert!(normalize("?!").is_empty());
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .map(strip_suffix)
        .filter(|term| term.chars().count() > MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Strip at most one suffix from an already-lowercased word.
///
/// Among the suffixes the word ends with, the longest one starts earliest and
/// therefore wins. In practice only `s`/`es` can both match.
pub fn strip_suffix(word: &str) -> &str {
    SUFFIXES
        .iter()
        .filter(|suffix| word.ends_with(*suffix))
        .map(|suffix| word.len() - suffix.len())
        .min()
        .map_or(word, |cut| &word[..cut])
}

/// Key used for whole-query bookkeeping: lowercase only, no stemming.
#[inline]
pub fn lowercase_query(query: &str) -> String {
    query.to_lowercase()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
