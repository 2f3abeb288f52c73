// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for customer-success triage.
//!
//! Issues are supplied by an external source and are read-only to this
//! crate: every function here borrows them and derives new values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Human-assigned base priority of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Scored exactly like [`Priority::High`].
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the string representation used in input files and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Priority {
    /// Exact match against the lower-case wire names.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Resolution status of an issue.
///
/// Only `solved` and `unsolved` are counted by the statistics aggregator;
/// any other value is kept verbatim so it round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    Solved,
    Unsolved,
    Other(String),
}

impl IssueStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IssueStatus::Solved => "solved",
            IssueStatus::Unsolved => "unsolved",
            IssueStatus::Other(s) => s,
        }
    }
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Other(String::new())
    }
}

impl From<String> for IssueStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "solved" => IssueStatus::Solved,
            "unsolved" => IssueStatus::Unsolved,
            _ => IssueStatus::Other(s),
        }
    }
}

impl From<IssueStatus> for String {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer-success ticket as delivered by the upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Upstream identifier, empty when the source does not provide one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Base priority. Only the exact lower-case names are recognized; any
    /// other value deserializes to `None`.
    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
    /// Free-text category used for score multipliers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Creation timestamp as an ISO-8601 string; parsed lazily.
    pub created_date: String,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub region_type: String,
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub issue_category: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub workflow_status: String,
}

fn lenient_priority<'de, D>(deserializer: D) -> std::result::Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let priority = Priority::from_wire(&s);
        if priority.is_none() {
            tracing::debug!(priority = %s, "unrecognized priority, using default base score");
        }
        priority
    }))
}

impl Issue {
    /// Creates an unsolved issue with empty categorical fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_date: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: None,
            category: None,
            created_date: created_date.into(),
            status: IssueStatus::Unsolved,
            region_type: String::new(),
            region_name: String::new(),
            issue_category: String::new(),
            channel: String::new(),
            workflow_status: String::new(),
        }
    }

    /// Creates an issue whose created date is the given instant.
    pub fn created_at(id: impl Into<String>, title: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self::new(id, title, created.to_rfc3339())
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_region(mut self, region_type: impl Into<String>, region_name: impl Into<String>) -> Self {
        self.region_type = region_type.into();
        self.region_name = region_name.into();
        self
    }

    pub fn with_issue_category(mut self, issue_category: impl Into<String>) -> Self {
        self.issue_category = issue_category.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_workflow_status(mut self, workflow_status: impl Into<String>) -> Self {
        self.workflow_status = workflow_status.into();
        self
    }

    /// Parses [`Issue::created_date`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] when the string is not a recognized
    /// ISO-8601 form.
    pub fn created(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.created_date).ok_or_else(|| Error::InvalidDate {
            issue: self.label().to_string(),
            value: self.created_date.clone(),
        })
    }

    /// Lower-cased `title` and `description`, joined by a space.
    pub fn scan_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }

    /// Identifier for messages: the id when present, the title otherwise.
    pub fn label(&self) -> &str {
        if self.id.is_empty() {
            &self.title
        } else {
            &self.id
        }
    }
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2026-01-31T09:30:00Z`, with offset), a naive
/// date-time (`2026-01-31T09:30:00`, `2026-01-31 09:30:00`) and a bare
/// date (`2026-01-31`). Naive forms are interpreted as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
