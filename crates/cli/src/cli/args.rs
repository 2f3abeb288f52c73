// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read issue data.

use clap::Args;
use std::path::PathBuf;

/// Issue data source.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Issue file (.json categories or array, or .jsonl)
    #[arg(long, short, env = "CT_INPUT", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Board filter arguments. Each flag overrides the config default.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter by region type (exact match, "all" to clear)
    #[arg(long, value_name = "TYPE")]
    pub region_type: Option<String>,

    /// Filter by region name (exact match, "all" to clear)
    #[arg(long, value_name = "NAME")]
    pub region_name: Option<String>,

    /// Filter by issue category (exact match, "all" to clear)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by intake channel (exact match, "all" to clear)
    #[arg(long)]
    pub channel: Option<String>,

    /// Filter by workflow status (exact match, "all" to clear)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by KEY=VALUE (repeatable; keys: regionType, regionName, category, channel, status)
    #[arg(long = "filter", short = 'q', value_name = "KEY=VALUE")]
    pub filter: Vec<String>,
}

/// Limit arguments for ranked results.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
