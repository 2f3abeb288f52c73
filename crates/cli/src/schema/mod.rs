// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types for JSON output structures.
//!
//! Commands serialize these directly, and `ct schema` derives JSON Schema
//! definitions from the same types, so the two cannot drift.
//!
//! [`IssueJson`] is the issue summary shared by the list and show outputs.

use ct_core::{FilterSet, Issue, Priority};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;

pub mod list;
pub mod show;
pub mod stats;

/// JSON representation of an issue.
#[derive(Debug, JsonSchema, Serialize)]
pub struct IssueJson {
    /// Upstream identifier; omitted when the source has none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Short summary of the problem.
    pub title: String,
    /// Longer free-text description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Human-assigned base priority, when recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Free-text category the score multipliers look at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Creation timestamp as given by the source.
    pub created_date: String,
    /// Resolution status (`solved`, `unsolved` or a source-specific value).
    pub status: String,
    pub region_type: String,
    pub region_name: String,
    pub issue_category: String,
    pub channel: String,
    pub workflow_status: String,
}

impl From<&Issue> for IssueJson {
    fn from(issue: &Issue) -> Self {
        IssueJson {
            id: issue.id.clone(),
            title: issue.title.clone(),
            description: issue.description.clone(),
            priority: issue.priority,
            category: issue.category.clone(),
            created_date: issue.created_date.clone(),
            status: issue.status.to_string(),
            region_type: issue.region_type.clone(),
            region_name: issue.region_name.clone(),
            issue_category: issue.issue_category.clone(),
            channel: issue.channel.clone(),
            workflow_status: issue.workflow_status.clone(),
        }
    }
}

/// The constrained filters, keyed by their canonical names.
pub fn active_filters(filters: &FilterSet) -> BTreeMap<String, String> {
    filters
        .active()
        .map(|(key, value)| (key.as_str().to_string(), value.to_string()))
        .collect()
}
