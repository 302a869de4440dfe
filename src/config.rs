// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete controller configuration.
//!
//! Every field has a default, so `{}` is a valid config file. Keys are
//! camelCase to match what a host application passes to its search box:
//!
//! ```json
//! { "minChars": 2, "maxSuggestions": 8, "debounceMs": 200 }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MIN_CHARS: usize = 1;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AutocompleteConfig {
    /// Shortest input (in characters) that triggers a suggestion lookup.
    pub min_chars: usize,
    /// Cap on the suggestion list length.
    pub max_suggestions: usize,
    /// Quiet period after the last keystroke before suggestions are computed.
    pub debounce_ms: u64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl AutocompleteConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::json("autocomplete config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::json(path.display().to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// A zero-length suggestion list would keep the dropdown permanently shut.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(Error::InvalidConfig(
                "maxSuggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
