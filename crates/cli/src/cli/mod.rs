// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::{FilterArgs, InputArgs, LimitArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Tier selector for `ct list --tier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    High,
    Medium,
    Low,
}

impl From<TierArg> for ct_core::Tier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::High => ct_core::Tier::High,
            TierArg::Medium => ct_core::Tier::Medium,
            TierArg::Low => ct_core::Tier::Low,
        }
    }
}

#[derive(Parser)]
#[command(name = "ct")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Score, filter and summarize customer-success issues")]
#[command(
    long_about = "Score, filter and summarize customer-success issues.\n\n\
    Each issue gets a dynamic priority from its base priority, age, keywords and category."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if ct was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Score as of this instant instead of now (RFC 3339 or YYYY-MM-DD)
    #[arg(long, global = true, env = "CT_NOW", value_name = "TIME")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show issue statistics for the filtered set
    #[command(after_help = colors::examples("\
Examples:
  ct stats -i issues.json                     All issues
  ct stats -i issues.json --channel email     Only issues that came in by email
  ct stats -q regionName=Travis -o json       JSON output for one region"))]
    Stats {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues ordered by dynamic priority
    #[command(after_help = colors::examples("\
Examples:
  ct list -i issues.json                      Every issue, highest score first
  ct list --tier high -n 10                   Top ten high-tier issues
  ct list --category billing --status open    Open billing issues"))]
    List {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Only show issues in this tier
        #[arg(long, short = 't', value_enum)]
        tier: Option<TierArg>,

        #[command(flatten)]
        limits: LimitArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the score breakdown for an issue
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ct show cs-42 -i issues.json                Explain one issue's score
  ct show cs-42 -o json                       Breakdown as JSON")
    )]
    Show {
        /// Issue ID
        id: String,

        #[command(flatten)]
        input: InputArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Manage configuration settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  ct schema stats    Output schema for 'ct stats -o json'
  ct schema list     Output schema for 'ct list -o json'

Available schemas: stats, list, show")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ct completion bash > ~/.local/share/bash-completion/completions/ct
  ct completion zsh > ~/.zfunc/_ct")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the path of the config file in effect, if any
    Path,
}

/// Schema output commands.
#[derive(Subcommand)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'ct stats' JSON output
    Stats,
    /// Output JSON Schema for 'ct list' JSON output
    List,
    /// Output JSON Schema for 'ct show' JSON output
    Show,
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
