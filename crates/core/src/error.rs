// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ct-core operations.

use thiserror::Error;

use crate::filter::FilterKey;

/// All possible errors that can occur in ct-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid created date '{value}' on issue '{issue}'\n  hint: use an ISO-8601 date such as 2026-01-31 or 2026-01-31T09:30:00Z")]
    InvalidDate { issue: String, value: String },

    #[error("unknown filter key: '{0}'\n  hint: valid keys are: {valid}", valid = FilterKey::valid_names())]
    UnknownFilterKey(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: critical, high, medium, low")]
    InvalidPriority(String),

    #[error("invalid tier: '{0}'\n  hint: valid tiers are: high, medium, low")]
    InvalidTier(String),

    #[error("invalid scoring rules: {0}")]
    InvalidRules(String),

    #[error("line {line}: {reason}")]
    ParseLine { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ct-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
