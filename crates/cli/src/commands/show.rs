// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use ct_core::{Board, BoardState, Clock, IssueCategories, PriorityCalculator};

use crate::cli::{InputArgs, OutputFormat};
use crate::display::format_breakdown;
use crate::error::{Error, Result};
use crate::schema::show::ShowOutputJson;

use super::Context;

pub fn run(ctx: &Context, id: &str, input: &InputArgs, output: OutputFormat) -> Result<()> {
    let categories = ctx.load_issues(input)?;
    let calculator = ctx.calculator()?;
    print!("{}", run_impl(&categories, &calculator, ctx.now, id, output)?);
    Ok(())
}

/// Internal implementation that accepts loaded issues for testing.
///
/// Lookup ignores filters; the first issue with a matching id wins.
pub(crate) fn run_impl<C: Clock>(
    categories: &IssueCategories,
    calculator: &PriorityCalculator<C>,
    now: DateTime<Utc>,
    id: &str,
    output: OutputFormat,
) -> Result<String> {
    let mut state = BoardState::new();
    state.select(Some(id.to_string()));
    let board = Board::new(categories, &state, calculator);

    let issue = board
        .selected()
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
    let priority = calculator.calculate_at(issue, now)?;

    match output {
        OutputFormat::Text => Ok(format_breakdown(issue, &priority)),
        OutputFormat::Json => {
            let json = ShowOutputJson {
                as_of: now,
                issue: issue.into(),
                priority,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
