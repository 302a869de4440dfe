// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive half: keystrokes in, dropdown state out.
//!
//! # States
//!
//! ```text
//!            keystroke                 timer fires, suggestions found
//!   Idle ───────────────▶ PendingDebounce ─────────────────────────▶ Open
//!    ▲                     │  ▲    │                                  │
//!    │  timer fires,       │  │    │ keystroke (re-arms timer)        │ Enter / pick / Esc / blur
//!    └── too short/empty ──┘  │    ▼                                  ▼
//!                             └── keystroke ───────────────────── Closed
//! ```
//!
//! Keyboard navigation only does something while `Open`. Enter without a
//! highlighted suggestion submits the raw input from any state.

use super::debounce::{DebounceTicket, Debouncer};
use crate::config::AutocompleteConfig;
use crate::search::SharedIndex;
use crate::types::Term;
use std::time::Instant;
use tracing::{debug, trace};

/// Where suggestions come from and where commits go.
///
/// [`SharedIndex`] is the production implementation.
pub trait SuggestionProvider {
    fn find_suggestions(&self, prefix: &str, limit: usize) -> Vec<Term>;
    fn record_search(&self, query: &str);
}

impl SuggestionProvider for SharedIndex {
    fn find_suggestions(&self, prefix: &str, limit: usize) -> Vec<Term> {
        SharedIndex::find_suggestions(self, prefix, limit)
    }

    fn record_search(&self, query: &str) {
        SharedIndex::record_search(self, query);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteState {
    /// Nothing pending, dropdown closed.
    Idle,
    /// A debounce timer is armed.
    PendingDebounce,
    /// Suggestions are populated and visible.
    Open,
    /// Explicitly dismissed.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitSource {
    /// A suggestion, by its position in the list.
    Suggestion(usize),
    /// The raw input value.
    Input,
}

/// A query the user settled on. Already recorded with the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub query: String,
    pub source: CommitSource,
}

/// Debounced type-ahead state for one input box.
#[derive(Debug)]
pub struct AutocompleteController<P: SuggestionProvider = SharedIndex> {
    provider: P,
    config: AutocompleteConfig,
    value: String,
    suggestions: Vec<Term>,
    state: AutocompleteState,
    highlighted: Option<usize>,
    debouncer: Debouncer,
}

impl<P: SuggestionProvider> AutocompleteController<P> {
    pub fn new(provider: P, config: AutocompleteConfig) -> Self {
        Self {
            provider,
            debouncer: Debouncer::new(config.debounce()),
            config,
            value: String::new(),
            suggestions: Vec::new(),
            state: AutocompleteState::Idle,
            highlighted: None,
        }
    }

    /// The input changed. Re-arms the debounce timer.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) -> DebounceTicket {
        self.value = value.into();
        self.highlighted = None;
        let ticket = self.debouncer.schedule(now);
        self.state = AutocompleteState::PendingDebounce;
        trace!(
            value = %self.value,
            generation = ticket.generation(),
            "debounce scheduled"
        );
        ticket
    }

    /// A host timer armed with `ticket` went off.
    ///
    /// Returns false, and does nothing, if the ticket was superseded by a later
    /// keystroke or cancelled.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if !self.debouncer.fire(ticket) {
            trace!(generation = ticket.generation(), "stale debounce ticket ignored");
            return false;
        }
        self.evaluate();
        true
    }

    /// Fire the pending timer if its deadline has passed by `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(_) => {
                self.evaluate();
                true
            }
            None => false,
        }
    }

    /// When the pending timer is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.pending().map(|ticket| ticket.deadline())
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Commit> {
        match (self.state, key) {
            (AutocompleteState::Open, Key::ArrowDown) => {
                let last = self.suggestions.len().saturating_sub(1);
                self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
                None
            }
            (AutocompleteState::Open, Key::ArrowUp) => {
                self.highlighted = self.highlighted.map(|i| i.saturating_sub(1));
                None
            }
            (AutocompleteState::Open, Key::Enter) => match self.highlighted {
                Some(index) => self.commit_suggestion(index),
                None => self.submit_input(),
            },
            (AutocompleteState::Open, Key::Escape) => {
                self.close();
                None
            }
            (_, Key::Enter) => self.submit_input(),
            _ => None,
        }
    }

    /// Pointer selection of the suggestion at `index`. Same as Enter on it.
    pub fn select(&mut self, index: usize) -> Option<Commit> {
        if self.state != AutocompleteState::Open {
            return None;
        }
        self.commit_suggestion(index)
    }

    /// Focus left the input or the user clicked elsewhere.
    pub fn blur(&mut self) {
        self.close();
    }

    /// Back to a blank, idle input.
    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.value.clear();
        self.suggestions.clear();
        self.highlighted = None;
        self.state = AutocompleteState::Idle;
    }

    #[inline]
    pub fn state(&self) -> AutocompleteState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == AutocompleteState::Open
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn suggestions(&self) -> &[Term] {
        &self.suggestions
    }

    /// Highlighted suggestion index; `None` means nothing is highlighted.
    #[inline]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[inline]
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn evaluate(&mut self) {
        self.highlighted = None;

        if self.value.chars().count() < self.config.min_chars {
            self.suggestions.clear();
            self.state = AutocompleteState::Idle;
            debug!(value = %self.value, "input below minimum length");
            return;
        }

        self.suggestions = self
            .provider
            .find_suggestions(&self.value, self.config.max_suggestions);
        self.state = if self.suggestions.is_empty() {
            AutocompleteState::Idle
        } else {
            AutocompleteState::Open
        };
        debug!(
            value = %self.value,
            suggestions = self.suggestions.len(),
            state = ?self.state,
            "suggestions evaluated"
        );
    }

    fn commit_suggestion(&mut self, index: usize) -> Option<Commit> {
        let query = self.suggestions.get(index)?.clone();
        self.value.clone_from(&query);
        self.provider.record_search(&query);
        self.close();
        Some(Commit {
            query,
            source: CommitSource::Suggestion(index),
        })
    }

    fn submit_input(&mut self) -> Option<Commit> {
        if self.value.trim().is_empty() {
            return None;
        }
        let query = self.value.clone();
        self.provider.record_search(&query);
        self.close();
        Some(Commit {
            query,
            source: CommitSource::Input,
        })
    }

    /// Closing also disarms the timer so a dismissed dropdown can't reopen
    /// itself; only the next keystroke does that.
    fn close(&mut self) {
        self.debouncer.cancel();
        self.highlighted = None;
        self.state = AutocompleteState::Closed;
    }
}
