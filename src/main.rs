// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use typeahead::{AutocompleteConfig, AutocompleteController, Commit, Corpus, SharedIndex};

mod cli;
use cli::display;
use cli::repl::ReplCommand;
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with command output.
/// Set `RUST_LOG=typeahead=debug` to watch indexing and debounce decisions.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Suggest {
            corpus,
            prefix,
            limit,
        } => {
            let index = load_index(&corpus)?;
            for term in index.find_suggestions(&prefix, limit) {
                println!("{}", term);
            }
        }
        Commands::Search { corpus, query } => {
            let index = load_index(&corpus)?;
            for id in index.search(&query) {
                println!("{}", id);
            }
        }
        Commands::Stats { corpus, json } => {
            let stats = load_index(&corpus)?.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                display::print_stats(&stats);
            }
        }
        Commands::Repl { corpus, config } => {
            let config = match config {
                Some(path) => AutocompleteConfig::from_path(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => AutocompleteConfig::default(),
            };
            let index = load_index(&corpus)?;
            run_repl(index, config)?;
        }
    }
    Ok(())
}

fn load_index(path: &Path) -> Result<SharedIndex> {
    let corpus =
        Corpus::from_path(path).with_context(|| format!("loading corpus {}", path.display()))?;
    let index = SharedIndex::default();
    index.index_corpus(&corpus);
    info!(
        documents = corpus.len(),
        searches = corpus.searches.len(),
        "corpus loaded"
    );
    Ok(index)
}

fn run_repl(index: SharedIndex, config: AutocompleteConfig) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut controller = AutocompleteController::new(index.clone(), config);
    let mut stdout = io::stdout();

    if interactive {
        println!("type to search; :down :up :enter :esc :blur :pick N :search Q :quit");
    }

    let mut lines = io::stdin().lock().lines();
    loop {
        if interactive {
            print!("> ");
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        let commit = match command {
            ReplCommand::Quit => break,
            ReplCommand::Type(value) => {
                controller.input(value, Instant::now());
                settle(&mut controller);
                None
            }
            ReplCommand::Key(key) => controller.handle_key(key),
            ReplCommand::Blur => {
                controller.blur();
                None
            }
            ReplCommand::Pick(i) => controller.select(i),
            ReplCommand::Search(query) => {
                println!("{}", display::doc_ids(&index.search(&query)));
                continue;
            }
        };

        render(&controller, commit.as_ref(), &index);
    }
    Ok(())
}

/// Wait out the debounce window, then let the controller look up suggestions.
fn settle(controller: &mut AutocompleteController) {
    if let Some(deadline) = controller.next_deadline() {
        std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }
    controller.poll(Instant::now());
}

fn render(controller: &AutocompleteController, commit: Option<&Commit>, index: &SharedIndex) {
    println!(
        "[{}] {}",
        display::state_label(controller.state()),
        controller.value()
    );
    if controller.is_open() {
        for line in display::suggestion_lines(controller.suggestions(), controller.highlighted()) {
            println!("{}", line);
        }
    }
    if let Some(commit) = commit {
        println!("search: {}", commit.query);
        println!("{}", display::doc_ids(&index.search(&commit.query)));
    }
}
