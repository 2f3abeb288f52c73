// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ctrs - the library behind the `ct` triage CLI.
//!
//! Commands load issues from a JSON or JSONL file, apply the board filters
//! and score every issue with [`ct_core`] against one fixed instant.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (`.caretriage/config.toml`)
//! - [`Cli`] - Argument definitions
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = ctrs::Cli::parse_from(["ct", "stats", "-i", "issues.json"]);
//! ctrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;
mod schema;

pub mod config;
pub mod error;

pub use cli::{
    Cli, Command, ConfigCommand, FilterArgs, InputArgs, LimitArgs, OutputFormat, SchemaCommand,
    TierArg,
};
pub use config::{find_config_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use commands::Context;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let context = || Context::new(cli.directory.clone(), cli.now.as_deref());
    match cli.command {
        Command::Stats {
            input,
            filters,
            output,
        } => commands::stats::run(&context()?, &input, &filters, output),
        Command::List {
            input,
            filters,
            tier,
            limits,
            output,
        } => commands::list::run(
            &context()?,
            &input,
            &filters,
            tier.map(Into::into),
            limits.limit,
            output,
        ),
        Command::Show { id, input, output } => commands::show::run(&context()?, &id, &input, output),
        Command::Config(cmd) => commands::config::run(&context()?, cmd),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            generate(shell, &mut Cli::command(), "ct", &mut std::io::stdout());
            Ok(())
        }
    }
}
