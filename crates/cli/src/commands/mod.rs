// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod list;
pub mod schema;
pub mod show;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use chrono::{DateTime, Utc};
use ct_core::{parse_timestamp, source, BoardState, FilterKey, FixedClock, IssueCategories, PriorityCalculator};
use std::path::PathBuf;

use crate::cli::{FilterArgs, InputArgs};
use crate::config::Config;
use crate::error::{Error, Result};

/// Everything a command needs that does not come from its own flags.
///
/// Built once per invocation so every issue is scored against the same
/// instant.
pub struct Context {
    pub root: PathBuf,
    pub now: DateTime<Utc>,
    pub config: Config,
}

impl Context {
    /// Resolve the working directory, the clock and the configuration.
    pub fn new(directory: Option<PathBuf>, now: Option<&str>) -> Result<Self> {
        let root = match directory {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let now = match now {
            Some(value) => parse_now(value)?,
            None => Utc::now(),
        };
        let config = Config::discover(&root)?;
        tracing::debug!(root = %root.display(), %now, "resolved context");
        Ok(Context { root, now, config })
    }

    /// Context over an explicit config.
    #[cfg(test)]
    pub fn with_config(root: PathBuf, now: DateTime<Utc>, config: Config) -> Self {
        Context { root, now, config }
    }

    /// The issue file: `--input`/`CT_INPUT` first, then the config.
    pub fn input_path(&self, input: &InputArgs) -> Result<PathBuf> {
        match &input.input {
            Some(path) if path.is_absolute() => Ok(path.clone()),
            Some(path) => Ok(self.root.join(path)),
            None => self.config.input_path().ok_or(Error::NoInput),
        }
    }

    pub fn load_issues(&self, input: &InputArgs) -> Result<IssueCategories> {
        let path = self.input_path(input)?;
        tracing::debug!(path = %path.display(), "loading issues");
        Ok(source::load(&path)?)
    }

    /// Board state seeded with the config filters, then the flags.
    pub fn board_state(&self, args: &FilterArgs) -> Result<BoardState> {
        let mut state = BoardState {
            filters: self.config.filters.clone(),
            ..BoardState::default()
        };
        apply_filter_args(&mut state, args)?;
        Ok(state)
    }

    pub fn calculator(&self) -> Result<PriorityCalculator<FixedClock>> {
        self.config.calculator(self.now)
    }
}

/// Parse the `--now` value.
pub fn parse_now(value: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(value).ok_or_else(|| Error::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Apply filter flags on top of whatever the state already holds.
///
/// Named flags go first, then each `--filter KEY=VALUE` in order, so a
/// later `--filter` wins over a named flag for the same key.
pub fn apply_filter_args(state: &mut BoardState, args: &FilterArgs) -> Result<()> {
    let named = [
        (FilterKey::RegionType, &args.region_type),
        (FilterKey::RegionName, &args.region_name),
        (FilterKey::Category, &args.category),
        (FilterKey::Channel, &args.channel),
        (FilterKey::Status, &args.status),
    ];
    for (key, value) in named {
        if let Some(value) = value {
            state.filters.set(key, value.clone());
        }
    }

    for arg in &args.filter {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| Error::InvalidFilterArg { arg: arg.clone() })?;
        state.set_filter(key.trim(), value.trim())?;
    }
    Ok(())
}
