// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use ct_core::Tier;
use std::io::IsTerminal;

/// ANSI 256-color codes used across help and reports.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// High tier: salmon red
    pub const TIER_HIGH: u8 = 203;
    /// Medium tier: amber
    pub const TIER_MEDIUM: u8 = 214;
    /// Low tier: sage green
    pub const TIER_LOW: u8 = 108;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a tier.
pub fn tier_code(tier: Tier) -> u8 {
    match tier {
        Tier::High => codes::TIER_HIGH,
        Tier::Medium => codes::TIER_MEDIUM,
        Tier::Low => codes::TIER_LOW,
    }
}

/// Render `text` in its tier color when colors are enabled.
pub fn tier(text: &str, tier: Tier) -> String {
    if should_colorize() {
        paint(tier_code(tier), text)
    } else {
        text.to_string()
    }
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   ct stats --channel email    Statistics for email issues
/// ```
///
/// Header lines (ending with `:`) get the header color; on example lines
/// the command gets the literal color and the description is left plain.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = trimmed.find("  ") {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
            continue;
        }

        result.push_str(line);
    }

    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
