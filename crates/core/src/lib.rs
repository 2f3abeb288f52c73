// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ct-core: Issue priority and filtering engine.
//!
//! This crate scores customer-success issues, filters them by categorical
//! fields and aggregates statistics. It is pure apart from reading a
//! [`Clock`] and the optional file loaders in [`source`].

pub mod board;
pub mod clock;
pub mod error;
pub mod filter;
pub mod issue;
pub mod priority;
pub mod rank;
pub mod rules;
pub mod source;
pub mod stats;

pub use board::{Board, BoardState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use filter::{apply_filters, FieldFilter, FilterKey, FilterSet};
pub use issue::{parse_timestamp, Issue, IssueStatus, Priority};
pub use priority::{calculate_dynamic_priority, DynamicPriority, PriorityCalculator, ScoreBreakdown, Tier};
pub use rank::{rank_issues, RankedIssue};
pub use rules::ScoringRules;
pub use stats::{calculate_issue_statistics, IssueCategories, IssueCategory, IssueStatistics};
