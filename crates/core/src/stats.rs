// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue statistics over a filtered set.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::clock::Clock;
use crate::error::Result;
use crate::filter::{apply_filters, FilterSet};
use crate::issue::{Issue, IssueStatus};
use crate::priority::{PriorityCalculator, Tier};

/// A named group of issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCategory {
    pub name: String,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Categories keyed by id, in insertion order.
pub type IssueCategories = IndexMap<String, IssueCategory>;

/// Every issue across categories: category order, then issue order.
pub fn flatten(categories: &IssueCategories) -> impl Iterator<Item = &Issue> {
    categories.values().flat_map(|category| category.issues.iter())
}

/// Tallies over a filtered issue set.
///
/// `critical_priority` is always zero: the tier mapping never produces a
/// critical tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IssueStatistics {
    pub total_issues: usize,
    pub solved_issues: usize,
    pub unsolved_issues: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    pub critical_priority: usize,
    /// Issue count per `issue_category` value.
    pub by_category: BTreeMap<String, usize>,
}

impl IssueStatistics {
    /// Sum of all tier buckets; always equals `total_issues`.
    pub fn tier_total(&self) -> usize {
        self.high_priority + self.medium_priority + self.low_priority + self.critical_priority
    }

    fn record(&mut self, issue: &Issue, tier: Tier) {
        self.total_issues += 1;
        match issue.status {
            IssueStatus::Solved => self.solved_issues += 1,
            IssueStatus::Unsolved => self.unsolved_issues += 1,
            IssueStatus::Other(_) => {}
        }
        match tier {
            Tier::High => self.high_priority += 1,
            Tier::Medium => self.medium_priority += 1,
            Tier::Low => self.low_priority += 1,
        }
        *self
            .by_category
            .entry(issue.issue_category.clone())
            .or_default() += 1;
    }
}

/// Scores and tallies `issues` at a single instant.
///
/// # Errors
///
/// Fails on the first issue whose created date cannot be parsed; no
/// partial statistics are returned.
pub fn tally<'a, I, C>(issues: I, calculator: &PriorityCalculator<C>, now: DateTime<Utc>) -> Result<IssueStatistics>
where
    I: IntoIterator<Item = &'a Issue>,
    C: Clock,
{
    let mut stats = IssueStatistics::default();
    for issue in issues {
        let priority = calculator.calculate_at(issue, now)?;
        stats.record(issue, priority.final_priority);
    }
    Ok(stats)
}

/// Flattens `categories`, applies `filters` and tallies the survivors.
///
/// The calculator's clock is read once so every issue is aged against the
/// same instant.
pub fn calculate_issue_statistics<C: Clock>(
    categories: &IssueCategories,
    filters: &FilterSet,
    calculator: &PriorityCalculator<C>,
) -> Result<IssueStatistics> {
    let now = calculator.now();
    let filtered = apply_filters(flatten(categories), filters);
    tracing::debug!(
        categories = categories.len(),
        matched = filtered.len(),
        "calculating issue statistics"
    );
    tally(filtered, calculator, now)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
