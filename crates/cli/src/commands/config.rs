// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::Result;

use super::Context;

/// Execute a config subcommand.
pub fn run(ctx: &Context, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => print!("{}", show(&ctx.config)?),
        ConfigCommand::Path => match ctx.config.path() {
            Some(path) => println!("{}", path.display()),
            None => eprintln!("no config file found; using defaults"),
        },
    }
    Ok(())
}

/// The effective configuration as TOML.
pub(crate) fn show(config: &Config) -> Result<String> {
    config.to_toml()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
