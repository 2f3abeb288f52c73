// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `ct list` JSON output.

use chrono::{DateTime, Utc};
use ct_core::{RankedIssue, Tier};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;

use super::IssueJson;

/// JSON output structure for the list command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Instant every issue was scored against.
    pub as_of: DateTime<Utc>,
    /// Filters in effect; unconstrained fields are omitted.
    pub filters: BTreeMap<String, String>,
    /// Issues ordered by descending score.
    pub issues: Vec<RankedIssueJson>,
}

/// An issue with its derived tier and score.
#[derive(Debug, JsonSchema, Serialize)]
pub struct RankedIssueJson {
    #[serde(flatten)]
    pub issue: IssueJson,
    /// Derived priority tier.
    pub tier: Tier,
    /// Dynamic priority score.
    pub score: f64,
    /// Whole days since the issue was created.
    pub days_open: u32,
}

impl From<&RankedIssue<'_>> for RankedIssueJson {
    fn from(ranked: &RankedIssue<'_>) -> Self {
        RankedIssueJson {
            issue: ranked.issue.into(),
            tier: ranked.tier(),
            score: ranked.score(),
            days_open: ranked.priority.days_open,
        }
    }
}
