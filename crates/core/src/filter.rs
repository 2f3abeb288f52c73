// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Categorical issue filters.
//!
//! A [`FilterSet`] holds five independent filters. Each is either the
//! sentinel `all` (no constraint) or an exact, case-sensitive value. An
//! issue passes when every constrained field matches.
//!
//! | key          | issue field       |
//! |--------------|-------------------|
//! | `regionType` | `region_type`     |
//! | `regionName` | `region_name`     |
//! | `category`   | `issue_category`  |
//! | `channel`    | `channel`         |
//! | `status`     | `workflow_status` |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Sentinel value meaning "no constraint".
pub const ALL: &str = "all";

/// Names of the five filterable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    RegionType,
    RegionName,
    Category,
    Channel,
    Status,
}

impl FilterKey {
    /// Every key, in display order.
    pub const ALL: [FilterKey; 5] = [
        FilterKey::RegionType,
        FilterKey::RegionName,
        FilterKey::Category,
        FilterKey::Channel,
        FilterKey::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::RegionType => "regionType",
            FilterKey::RegionName => "regionName",
            FilterKey::Category => "category",
            FilterKey::Channel => "channel",
            FilterKey::Status => "status",
        }
    }

    /// The issue field this key constrains.
    pub fn field<'a>(&self, issue: &'a Issue) -> &'a str {
        match self {
            FilterKey::RegionType => &issue.region_type,
            FilterKey::RegionName => &issue.region_name,
            FilterKey::Category => &issue.issue_category,
            FilterKey::Channel => &issue.channel,
            FilterKey::Status => &issue.workflow_status,
        }
    }

    /// Returns valid key names for error messages.
    pub fn valid_names() -> &'static str {
        "regionType, regionName, category, channel, status"
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = Error;

    /// Accepts the camelCase names plus snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regionType" | "region_type" | "region-type" => Ok(FilterKey::RegionType),
            "regionName" | "region_name" | "region-name" => Ok(FilterKey::RegionName),
            "category" => Ok(FilterKey::Category),
            "channel" => Ok(FilterKey::Channel),
            "status" => Ok(FilterKey::Status),
            _ => Err(Error::UnknownFilterKey(s.to_string())),
        }
    }
}

/// A single field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    #[default]
    All,
    Exact(String),
}

impl FieldFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Exact(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FieldFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldFilter::All => ALL,
            FieldFilter::Exact(value) => value,
        }
    }
}

impl From<&str> for FieldFilter {
    fn from(value: &str) -> Self {
        if value == ALL {
            FieldFilter::All
        } else {
            FieldFilter::Exact(value.to_string())
        }
    }
}

impl From<String> for FieldFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            FieldFilter::All
        } else {
            FieldFilter::Exact(value)
        }
    }
}

/// The conjunction of all five field filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct FilterSet {
    region_type: FieldFilter,
    region_name: FieldFilter,
    category: FieldFilter,
    channel: FieldFilter,
    status: FieldFilter,
}

impl FilterSet {
    /// Creates a filter set with every field set to `all`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter set from `(key, value)` pairs.
    ///
    /// Later pairs for the same key override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFilterKey`] on the first unrecognized key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = FilterSet::new();
        for (key, value) in pairs {
            let key: FilterKey = key.as_ref().parse()?;
            filters.set(key, value);
        }
        Ok(filters)
    }

    pub fn get(&self, key: FilterKey) -> &FieldFilter {
        match key {
            FilterKey::RegionType => &self.region_type,
            FilterKey::RegionName => &self.region_name,
            FilterKey::Category => &self.category,
            FilterKey::Channel => &self.channel,
            FilterKey::Status => &self.status,
        }
    }

    fn slot(&mut self, key: FilterKey) -> &mut FieldFilter {
        match key {
            FilterKey::RegionType => &mut self.region_type,
            FilterKey::RegionName => &mut self.region_name,
            FilterKey::Category => &mut self.category,
            FilterKey::Channel => &mut self.channel,
            FilterKey::Status => &mut self.status,
        }
    }

    /// Sets one field; the value `all` clears the constraint.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        *self.slot(key) = FieldFilter::from(value.into());
    }

    /// Sets one field (builder pattern).
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a field by its textual key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFilterKey`] if `key` is not recognized.
    pub fn set_named(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.set(key.parse()?, value);
        Ok(())
    }

    pub fn clear(&mut self, key: FilterKey) {
        *self.slot(key) = FieldFilter::All;
    }

    /// Returns true when no field is constrained.
    pub fn is_unconstrained(&self) -> bool {
        FilterKey::ALL.iter().all(|key| self.get(*key).is_all())
    }

    /// Constrained fields and their values, in key order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        FilterKey::ALL.into_iter().filter_map(move |key| match self.get(key) {
            FieldFilter::All => None,
            FieldFilter::Exact(value) => Some((key, value.as_str())),
        })
    }

    /// Overlays the constrained fields of `other` onto a copy of `self`.
    pub fn merged(&self, other: &FilterSet) -> FilterSet {
        let mut merged = self.clone();
        for (key, value) in other.active() {
            merged.set(key, value);
        }
        merged
    }

    /// Check if an issue passes every constrained field.
    pub fn matches(&self, issue: &Issue) -> bool {
        FilterKey::ALL
            .iter()
            .all(|key| self.get(*key).matches(key.field(issue)))
    }
}

impl TryFrom<BTreeMap<String, String>> for FilterSet {
    type Error = Error;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self> {
        FilterSet::from_pairs(map)
    }
}

impl From<FilterSet> for BTreeMap<String, String> {
    fn from(filters: FilterSet) -> Self {
        filters
            .active()
            .map(|(key, value)| (key.as_str().to_string(), value.to_string()))
            .collect()
    }
}

/// Returns the issues that pass `filters`, preserving input order.
///
/// The source collection is untouched; the result borrows from it.
pub fn apply_filters<'a, I>(issues: I, filters: &FilterSet) -> Vec<&'a Issue>
where
    I: IntoIterator<Item = &'a Issue>,
{
    issues
        .into_iter()
        .filter(|issue| filters.matches(issue))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
