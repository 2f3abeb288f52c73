// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading issue data from local files.
//!
//! Three layouts are accepted:
//!
//! - `.jsonl`: one issue object per line, blank lines skipped
//! - JSON object: `{ "<key>": { "name": ..., "issues": [...] }, ... }`
//! - JSON array: `[ issue, issue, ... ]`
//!
//! Flat layouts are wrapped in a single category keyed [`ALL_CATEGORY`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::stats::{IssueCategories, IssueCategory};

/// Key of the synthetic category holding flat issue lists.
pub const ALL_CATEGORY: &str = "all";

/// Reads all issues from a JSONL file.
pub fn read_jsonl(path: &Path) -> Result<Vec<Issue>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut issues = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let issue: Issue = serde_json::from_str(&line).map_err(|e| Error::ParseLine {
            line: index + 1,
            reason: e.to_string(),
        })?;
        issues.push(issue);
    }

    Ok(issues)
}

/// Parses a JSON document in either the categories or flat layout.
pub fn parse_json(content: &str) -> Result<IssueCategories> {
    if content.trim_start().starts_with('[') {
        let issues: Vec<Issue> = serde_json::from_str(content)?;
        Ok(single_category(issues))
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

/// Wraps a flat issue list in one category.
pub fn single_category(issues: Vec<Issue>) -> IssueCategories {
    let mut categories = IssueCategories::new();
    categories.insert(
        ALL_CATEGORY.to_string(),
        IssueCategory {
            name: "All issues".to_string(),
            issues,
        },
    );
    categories
}

/// Loads issue categories from `path`, choosing the layout by extension
/// and content.
pub fn load(path: &Path) -> Result<IssueCategories> {
    let is_jsonl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));
    let categories = if is_jsonl {
        single_category(read_jsonl(path)?)
    } else {
        parse_json(&std::fs::read_to_string(path)?)?
    };
    tracing::debug!(
        path = %path.display(),
        categories = categories.len(),
        "loaded issue data"
    );
    Ok(categories)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
