// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Triage ordering by dynamic priority.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::Result;
use crate::issue::Issue;
use crate::priority::{DynamicPriority, PriorityCalculator, Tier};

/// An issue paired with its derived priority.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedIssue<'a> {
    pub issue: &'a Issue,
    pub priority: DynamicPriority,
}

impl RankedIssue<'_> {
    pub fn tier(&self) -> Tier {
        self.priority.final_priority
    }

    pub fn score(&self) -> f64 {
        self.priority.priority_score
    }
}

/// Scores every issue and orders them by descending score.
///
/// Equal scores keep their input order.
pub fn rank_issues<'a, I, C>(
    issues: I,
    calculator: &PriorityCalculator<C>,
    now: DateTime<Utc>,
) -> Result<Vec<RankedIssue<'a>>>
where
    I: IntoIterator<Item = &'a Issue>,
    C: Clock,
{
    let mut ranked = issues
        .into_iter()
        .map(|issue| {
            Ok(RankedIssue {
                issue,
                priority: calculator.calculate_at(issue, now)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
    Ok(ranked)
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
