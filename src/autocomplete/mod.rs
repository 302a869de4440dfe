// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounced type-ahead for an interactive search box.
//!
//! The controller never computes suggestions for a value the user has already
//! typed past: every keystroke supersedes the previous timer, and a superseded
//! timer firing late is a no-op.

mod controller;
pub mod debounce;

pub use controller::*;
pub use debounce::{DebounceTicket, Debouncer};
