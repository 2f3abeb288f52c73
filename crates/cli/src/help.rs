// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Quick reference shown after the main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Quickstart:
  ct stats -i issues.json                  Tier and status counts
  ct list -i issues.json --tier high       Highest-scoring issues first
  ct show cs-42 -i issues.json             Score breakdown for one issue
  ct list --filter regionName=Travis       Filter by any board field

Scoring:
  base (critical/high 75, medium 50, low 25) + age bonus + keyword bonus,
  then x each matching category multiplier. >= 100 high, >= 60 medium.",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
