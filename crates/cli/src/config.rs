// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.caretriage/config.toml` and includes:
//! - `input`: Default issue file (relative to the project root or absolute)
//! - `[filters]`: Default filter values applied before command-line filters
//! - `[scoring]`: Overrides for the scoring tables
//!
//! The file is optional. When no project directory is found the user-level
//! `config.toml` under the platform config dir is tried, then defaults.

use chrono::{DateTime, Utc};
use ct_core::{FilterSet, FixedClock, PriorityCalculator, ScoringRules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".caretriage";
const CONFIG_FILE_NAME: &str = "config.toml";
const APP_NAME: &str = "caretriage";

/// Project configuration stored in `.caretriage/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default issue file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Default filters, keyed like `regionType = "county"`.
    pub filters: FilterSet,
    /// Scoring table overrides; omitted sections keep the stock values.
    pub scoring: ScoringRules,
    /// Directory relative inputs resolve against.
    #[serde(skip)]
    root: Option<PathBuf>,
    /// File this config was read from.
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// Parses configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Loads configuration from the given `.caretriage/` directory.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_file(&config_dir.join(CONFIG_FILE_NAME), config_dir.parent())
    }

    fn load_file(path: &Path, root: Option<&Path>) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config = Self::from_toml(&content)?;
        config.root = root.map(Path::to_path_buf);
        config.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Finds and loads the configuration that applies to `start`.
    ///
    /// Order: nearest `.caretriage/config.toml` walking up from `start`,
    /// then the user-level config file, then defaults.
    pub fn discover(start: &Path) -> Result<Self> {
        if let Some(dir) = find_config_dir(start) {
            if dir.join(CONFIG_FILE_NAME).is_file() {
                return Self::load(&dir);
            }
        }
        if let Some(user) = user_config_path() {
            if user.is_file() {
                return Self::load_file(&user, user.parent());
            }
        }
        Ok(Config {
            root: Some(start.to_path_buf()),
            ..Config::default()
        })
    }

    /// The file this config was read from; `None` for defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The configured input file, resolved against the project root.
    pub fn input_path(&self) -> Option<PathBuf> {
        let input = Path::new(self.input.as_ref()?);
        if input.is_absolute() {
            return Some(input.to_path_buf());
        }
        Some(match &self.root {
            Some(root) => root.join(input),
            None => input.to_path_buf(),
        })
    }

    /// Builds a calculator from the scoring overrides, pinned at `now`.
    pub fn calculator(&self, now: DateTime<Utc>) -> Result<PriorityCalculator<FixedClock>> {
        Ok(PriorityCalculator::with_rules(self.scoring.clone(), FixedClock(now))?)
    }

    /// Serializes the effective configuration.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

/// Find the .caretriage directory by walking up from `start`.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let dir = current.join(CONFIG_DIR_NAME);
        if dir.is_dir() {
            return Some(dir);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
