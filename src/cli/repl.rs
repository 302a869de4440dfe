// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line protocol for `typeahead repl`.

use typeahead::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Replace the input box contents.
    Type(String),
    Key(Key),
    Blur,
    Pick(usize),
    Search(String),
    Quit,
}

impl ReplCommand {
    /// Parse one line. Anything not starting with ':' is typed input, so an
    /// empty line clears the box.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Type(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "down" => Ok(Self::Key(Key::ArrowDown)),
            "up" => Ok(Self::Key(Key::ArrowUp)),
            "enter" => Ok(Self::Key(Key::Enter)),
            "esc" => Ok(Self::Key(Key::Escape)),
            "blur" => Ok(Self::Blur),
            "pick" => arg
                .parse()
                .map(Self::Pick)
                .map_err(|_| format!("':pick' needs a suggestion number, got '{}'", arg)),
            "search" => Ok(Self::Search(arg.to_string())),
            "quit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command ':{}'", other)),
        }
    }
}
