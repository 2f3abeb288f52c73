// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue board state and view.
//!
//! [`BoardState`] is the UI-adjacent state a presentation layer owns
//! (selected filters, expanded tree nodes, panel visibility). [`Board`]
//! borrows that state together with the issue data and a calculator, and
//! derives everything a view renders. Nothing here is global.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::clock::Clock;
use crate::error::Result;
use crate::filter::{apply_filters, FilterKey, FilterSet};
use crate::issue::Issue;
use crate::priority::{DynamicPriority, PriorityCalculator};
use crate::rank::{rank_issues, RankedIssue};
use crate::stats::{calculate_issue_statistics, flatten, IssueCategories, IssueStatistics};

/// Presentation state for an issue board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardState {
    pub filters: FilterSet,
    pub expanded_nodes: BTreeSet<String>,
    pub panel_open: bool,
    pub selected_issue: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter by its textual key.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.filters.set_named(key, value)
    }

    pub fn clear_filter(&mut self, key: FilterKey) {
        self.filters.clear(key);
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterSet::new();
    }

    /// Flips a node's expansion and returns its new state.
    pub fn toggle_node(&mut self, node: &str) -> bool {
        if self.expanded_nodes.remove(node) {
            false
        } else {
            self.expanded_nodes.insert(node.to_string());
            true
        }
    }

    pub fn is_expanded(&self, node: &str) -> bool {
        self.expanded_nodes.contains(node)
    }

    pub fn collapse_all(&mut self) {
        self.expanded_nodes.clear();
    }

    /// Flips the detail panel and returns whether it is now open.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    /// Selects an issue and opens the detail panel; `None` closes it.
    pub fn select(&mut self, issue_id: Option<String>) {
        self.panel_open = issue_id.is_some();
        self.selected_issue = issue_id;
    }
}

/// Read-only view combining issue data with board state.
pub struct Board<'a, C: Clock> {
    categories: &'a IssueCategories,
    state: &'a BoardState,
    calculator: &'a PriorityCalculator<C>,
}

impl<'a, C: Clock> Board<'a, C> {
    pub fn new(
        categories: &'a IssueCategories,
        state: &'a BoardState,
        calculator: &'a PriorityCalculator<C>,
    ) -> Self {
        Board {
            categories,
            state,
            calculator,
        }
    }

    pub fn state(&self) -> &BoardState {
        self.state
    }

    /// Issues passing the board's filters, in source order.
    pub fn visible_issues(&self) -> Vec<&'a Issue> {
        apply_filters(flatten(self.categories), &self.state.filters)
    }

    pub fn statistics(&self) -> Result<IssueStatistics> {
        calculate_issue_statistics(self.categories, &self.state.filters, self.calculator)
    }

    /// Visible issues ordered by descending score.
    pub fn ranked(&self) -> Result<Vec<RankedIssue<'a>>> {
        rank_issues(self.visible_issues(), self.calculator, self.calculator.now())
    }

    /// The selected issue, looked up across all categories regardless of
    /// filters.
    pub fn selected(&self) -> Option<&'a Issue> {
        let id = self.state.selected_issue.as_deref()?;
        flatten(self.categories).find(|issue| issue.id == id)
    }

    /// Derived priority of the selected issue.
    pub fn selected_priority(&self) -> Option<Result<DynamicPriority>> {
        self.selected().map(|issue| self.calculator.calculate(issue))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
