// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use ct_core::{Board, Clock};

use crate::cli::{FilterArgs, InputArgs, OutputFormat};
use crate::display::format_statistics;
use crate::error::Result;
use crate::schema::active_filters;
use crate::schema::stats::StatsOutputJson;

use super::Context;

pub fn run(ctx: &Context, input: &InputArgs, filters: &FilterArgs, output: OutputFormat) -> Result<()> {
    let categories = ctx.load_issues(input)?;
    let state = ctx.board_state(filters)?;
    let calculator = ctx.calculator()?;
    let board = Board::new(&categories, &state, &calculator);
    print!("{}", render(&board, ctx.now, output)?);
    Ok(())
}

/// Internal implementation that accepts a board for testing.
pub(crate) fn render<C: Clock>(board: &Board<'_, C>, now: DateTime<Utc>, output: OutputFormat) -> Result<String> {
    let statistics = board.statistics()?;
    tracing::debug!(total = statistics.total_issues, "computed statistics");

    match output {
        OutputFormat::Text => Ok(format_statistics(&statistics, &board.state().filters)),
        OutputFormat::Json => {
            let json = StatsOutputJson {
                as_of: now,
                filters: active_filters(&board.state().filters),
                statistics,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
