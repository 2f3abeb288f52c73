// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `ct stats` JSON output.

use chrono::{DateTime, Utc};
use ct_core::IssueStatistics;
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON output structure for the stats command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct StatsOutputJson {
    /// Instant every issue was scored against.
    pub as_of: DateTime<Utc>,
    /// Filters in effect; unconstrained fields are omitted.
    pub filters: BTreeMap<String, String>,
    /// Counts over the filtered set.
    #[serde(flatten)]
    pub statistics: IssueStatistics,
}
