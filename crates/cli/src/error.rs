// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ctrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no issue file given\n  hint: pass --input <file>, set CT_INPUT, or set 'input' in .caretriage/config.toml")]
    NoInput,

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("invalid created date '{value}' on issue '{issue}'\n  hint: use an ISO-8601 date such as 2026-01-31 or 2026-01-31T09:30:00Z")]
    InvalidDate { issue: String, value: String },

    #[error("unknown filter key: '{0}'\n  hint: valid keys are: {valid}", valid = ct_core::FilterKey::valid_names())]
    UnknownFilterKey(String),

    #[error("invalid filter '{arg}': expected KEY=VALUE")]
    InvalidFilterArg { arg: String },

    #[error("invalid tier: '{0}'\n  hint: valid tiers are: high, medium, low")]
    InvalidTier(String),

    #[error("invalid timestamp: '{value}'\n  hint: use RFC 3339 (2026-01-31T09:30:00Z) or a date (2026-01-31)")]
    InvalidTimestamp { value: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for ctrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ct_core::Error> for Error {
    fn from(e: ct_core::Error) -> Self {
        match e {
            ct_core::Error::InvalidDate { issue, value } => Error::InvalidDate { issue, value },
            ct_core::Error::UnknownFilterKey(key) => Error::UnknownFilterKey(key),
            ct_core::Error::InvalidTier(s) => Error::InvalidTier(s),
            ct_core::Error::InvalidPriority(s) => {
                Error::InvalidInput(format!("invalid priority: {}", s))
            }
            ct_core::Error::InvalidRules(reason) => {
                Error::Config(format!("invalid scoring rules: {}", reason))
            }
            ct_core::Error::ParseLine { line, reason } => {
                Error::InvalidInput(format!("line {}: {}", line, reason))
            }
            ct_core::Error::Io(e) => Error::Io(e),
            ct_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
