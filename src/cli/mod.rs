// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Every subcommand loads a JSON corpus into memory first. `suggest`, `search`
//! and `stats` answer one question and exit; `repl` drives an autocomplete
//! controller line by line so the debounce and dropdown behaviour can be
//! exercised from a terminal.

pub mod display;
pub mod repl;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "In-memory prefix autocompletion over a JSON corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print ranked completions for a prefix
    Suggest {
        /// Corpus file: {"documents": [{"id", "content"}], "searches": [...]}
        #[arg(short, long)]
        corpus: PathBuf,

        /// Prefix to complete (empty prints the most popular queries)
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Print ids of documents matching every query term
    Search {
        /// Corpus file
        #[arg(short, long)]
        corpus: PathBuf,

        /// Search query
        query: String,
    },

    /// Print index size counters
    Stats {
        /// Corpus file
        #[arg(short, long)]
        corpus: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Drive an autocomplete controller interactively
    ///
    /// Plain lines are typed into the input box. Lines starting with ':' are
    /// commands: :down, :up, :enter, :esc, :blur, :pick N, :search Q, :quit.
    Repl {
        /// Corpus file
        #[arg(short, long)]
        corpus: PathBuf,

        /// Controller config: {"minChars", "maxSuggestions", "debounceMs"}
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
