// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use ct_core::{Board, Clock, RankedIssue, Tier};

use crate::cli::{FilterArgs, InputArgs, OutputFormat};
use crate::display::format_ranked_line;
use crate::error::Result;
use crate::schema::active_filters;
use crate::schema::list::{ListOutputJson, RankedIssueJson};

use super::Context;

pub fn run(
    ctx: &Context,
    input: &InputArgs,
    filters: &FilterArgs,
    tier: Option<Tier>,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let categories = ctx.load_issues(input)?;
    let state = ctx.board_state(filters)?;
    let calculator = ctx.calculator()?;
    let board = Board::new(&categories, &state, &calculator);
    print!("{}", render(&board, ctx.now, tier, limit, output)?);
    Ok(())
}

/// Ranked issues after the tier filter and limit.
pub(crate) fn select<'a, C: Clock>(
    board: &Board<'a, C>,
    tier: Option<Tier>,
    limit: Option<usize>,
) -> Result<Vec<RankedIssue<'a>>> {
    let mut ranked = board.ranked()?;
    if let Some(tier) = tier {
        ranked.retain(|r| r.tier() == tier);
    }
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    Ok(ranked)
}

/// Internal implementation that accepts a board for testing.
pub(crate) fn render<C: Clock>(
    board: &Board<'_, C>,
    now: DateTime<Utc>,
    tier: Option<Tier>,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<String> {
    let ranked = select(board, tier, limit)?;

    match output {
        OutputFormat::Text => {
            if ranked.is_empty() {
                return Ok("No issues found.\n".to_string());
            }
            let mut out = String::new();
            for issue in &ranked {
                out.push_str(&format_ranked_line(issue));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                as_of: now,
                filters: active_filters(&board.state().filters),
                issues: ranked.iter().map(RankedIssueJson::from).collect(),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
