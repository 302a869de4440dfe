// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! OneDark colors on a TTY, plain text everywhere else. `NO_COLOR` turns
//! colors off unconditionally, so piped output and tests see bare strings.

use std::io::IsTerminal;
use std::sync::OnceLock;
use typeahead::{AutocompleteState, DocSet, IndexStats, Term};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark palette
pub const RED: (u8, u8, u8) = (224, 108, 117);
pub const GREEN: (u8, u8, u8) = (152, 195, 121);
pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
pub const BLUE: (u8, u8, u8) = (97, 175, 239);
pub const CYAN: (u8, u8, u8) = (86, 182, 194);
pub const GRAY: (u8, u8, u8) = (92, 99, 112);

static USE_COLORS: OnceLock<bool> = OnceLock::new();

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Check if colors should be used (TTY detection, cached)
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}

/// Apply a palette color with optional modifiers
pub fn themed(color: (u8, u8, u8), modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color, modifiers, text)
}

fn paint(enabled: bool, color: (u8, u8, u8), modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), rgb(color), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    println!("│ {} │", pad_right(content, BOX_WIDTH - 2));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let used = visible_len(label) + 3;
    println!(
        "┌─ {} {}┐",
        themed(CYAN, &[BOLD], label),
        "─".repeat(BOX_WIDTH.saturating_sub(used))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("└{}┘", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Numbered suggestion lines; the highlighted one gets a marker.
pub fn suggestion_lines(suggestions: &[Term], highlighted: Option<usize>) -> Vec<String> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, term)| {
            if highlighted == Some(i) {
                format!("> {}. {}", i, themed(GREEN, &[BOLD], term))
            } else {
                format!("  {}. {}", i, term)
            }
        })
        .collect()
}

/// Color-coded controller state label
pub fn state_label(state: AutocompleteState) -> String {
    let (text, color) = match state {
        AutocompleteState::Idle => ("idle", GRAY),
        AutocompleteState::PendingDebounce => ("pending", YELLOW),
        AutocompleteState::Open => ("open", GREEN),
        AutocompleteState::Closed => ("closed", RED),
    };
    themed(color, &[], text)
}

/// Document ids on one line, or a dim placeholder.
pub fn doc_ids(docs: &DocSet) -> String {
    if docs.is_empty() {
        return themed(GRAY, &[DIM], "(no matches)");
    }
    docs.iter()
        .map(|id| themed(BLUE, &[], id.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label/value pairs for the stats box.
pub fn stats_rows(stats: &IndexStats) -> Vec<(&'static str, String)> {
    vec![
        ("Documents", stats.documents.to_string()),
        ("Terms", stats.terms.to_string()),
        ("Occurrences", stats.occurrences.to_string()),
        ("Tracked queries", stats.tracked_queries.to_string()),
        ("Cached prefixes", stats.cached_prefixes.to_string()),
    ]
}

pub fn print_stats(stats: &IndexStats) {
    section_top("INDEX");
    for (label, value) in stats_rows(stats) {
        row(&format!("{} {}", pad_right(label, 18), themed(YELLOW, &[], &value)));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
