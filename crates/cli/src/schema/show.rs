// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `ct show` JSON output.

use chrono::{DateTime, Utc};
use ct_core::DynamicPriority;
use schemars::JsonSchema;
use serde::Serialize;

use super::IssueJson;

/// An issue together with how its score was derived.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ShowOutputJson {
    /// Instant the issue was scored against.
    pub as_of: DateTime<Utc>,
    pub issue: IssueJson,
    /// Tier, score and the components the score was built from.
    pub priority: DynamicPriority,
}
