// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoring tables for dynamic priority.
//!
//! The constants below are the stock rules. [`ScoringRules`] bundles them
//! into a value that can be tuned from configuration without touching the
//! calculator's control flow.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base score for `critical` and `high` issues.
pub const BASE_SCORE_HIGH: f64 = 75.0;
/// Base score for `medium` issues.
pub const BASE_SCORE_MEDIUM: f64 = 50.0;
/// Base score for `low` issues.
pub const BASE_SCORE_LOW: f64 = 25.0;
/// Base score when an issue carries no recognized priority.
pub const BASE_SCORE_UNSET: f64 = 50.0;

/// `(days_over, bonus)` pairs, highest threshold first. Only the first
/// threshold exceeded applies.
pub const AGE_ESCALATION: [(u32, f64); 5] = [(30, 40.0), (21, 30.0), (14, 20.0), (7, 10.0), (3, 5.0)];

pub const HIGH_KEYWORD_WEIGHT: f64 = 15.0;

pub const HIGH_PRIORITY_KEYWORDS: [&str; 16] = [
    "critical",
    "urgent",
    "failure",
    "down",
    "outage",
    "breach",
    "security",
    "data loss",
    "revenue",
    "compliance",
    "patient safety",
    "billing",
    "HIPAA",
    "lawsuit",
    "emergency",
    "crash",
];

pub const MEDIUM_KEYWORD_WEIGHT: f64 = 5.0;

pub const MEDIUM_PRIORITY_KEYWORDS: [&str; 10] = [
    "issue",
    "problem",
    "error",
    "bug",
    "delay",
    "slow",
    "missing",
    "incorrect",
    "discrepancy",
    "timeout",
];

/// Category keyword multipliers, applied in this order.
pub const CATEGORY_MULTIPLIERS: [(&str, f64); 6] = [
    ("technical", 1.2),
    ("data", 1.3),
    ("billing", 1.4),
    ("compliance", 1.5),
    ("security", 1.6),
    ("patient", 1.4),
];

/// Scores at or above this map to the high tier.
pub const HIGH_TIER_THRESHOLD: f64 = 100.0;
/// Scores at or above this (and below the high threshold) map to medium.
pub const MEDIUM_TIER_THRESHOLD: f64 = 60.0;

/// Base score per human-assigned priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseScores {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    pub unset: f64,
}

impl Default for BaseScores {
    fn default() -> Self {
        BaseScores {
            critical: BASE_SCORE_HIGH,
            high: BASE_SCORE_HIGH,
            medium: BASE_SCORE_MEDIUM,
            low: BASE_SCORE_LOW,
            unset: BASE_SCORE_UNSET,
        }
    }
}

/// Bonus granted once an issue has been open strictly longer than `days_over`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeStep {
    pub days_over: u32,
    pub bonus: f64,
}

/// Additive weight for a keyword found in the title or description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: f64,
}

/// Multiplier for a keyword found in the issue's free-text category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMultiplier {
    pub keyword: String,
    pub factor: f64,
}

/// Lower bounds of the high and medium tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            high: HIGH_TIER_THRESHOLD,
            medium: MEDIUM_TIER_THRESHOLD,
        }
    }
}

/// The complete rule set consumed by the priority calculator.
///
/// Missing sections fall back to the stock tables when deserialized, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub base: BaseScores,
    pub age_escalation: Vec<AgeStep>,
    pub keywords: Vec<KeywordWeight>,
    pub category_multipliers: Vec<CategoryMultiplier>,
    pub tiers: TierThresholds,
}

impl Default for ScoringRules {
    fn default() -> Self {
        let high = HIGH_PRIORITY_KEYWORDS.iter().map(|k| KeywordWeight {
            keyword: (*k).to_string(),
            weight: HIGH_KEYWORD_WEIGHT,
        });
        let medium = MEDIUM_PRIORITY_KEYWORDS.iter().map(|k| KeywordWeight {
            keyword: (*k).to_string(),
            weight: MEDIUM_KEYWORD_WEIGHT,
        });
        ScoringRules {
            base: BaseScores::default(),
            age_escalation: AGE_ESCALATION
                .iter()
                .map(|&(days_over, bonus)| AgeStep { days_over, bonus })
                .collect(),
            keywords: high.chain(medium).collect(),
            category_multipliers: CATEGORY_MULTIPLIERS
                .iter()
                .map(|&(keyword, factor)| CategoryMultiplier {
                    keyword: keyword.to_string(),
                    factor,
                })
                .collect(),
            tiers: TierThresholds::default(),
        }
    }
}

impl ScoringRules {
    /// Checks the rules and trims every keyword.
    ///
    /// Keywords keep their case. Text is lower-cased before matching, so a
    /// keyword with upper-case letters (such as the stock `HIPAA`) never
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRules`] when a weight, bonus, factor or
    /// threshold is negative or not finite, a keyword is blank, the age
    /// steps are not strictly descending, or the medium threshold exceeds
    /// the high threshold.
    pub fn validated(mut self) -> Result<Self> {
        let base = &self.base;
        for (name, value) in [
            ("base.critical", base.critical),
            ("base.high", base.high),
            ("base.medium", base.medium),
            ("base.low", base.low),
            ("base.unset", base.unset),
            ("tiers.high", self.tiers.high),
            ("tiers.medium", self.tiers.medium),
        ] {
            non_negative(name, value)?;
        }

        if self.tiers.medium > self.tiers.high {
            return Err(Error::InvalidRules(format!(
                "tiers.medium ({}) must not exceed tiers.high ({})",
                self.tiers.medium, self.tiers.high
            )));
        }

        for pair in self.age_escalation.windows(2) {
            if pair[1].days_over >= pair[0].days_over {
                return Err(Error::InvalidRules(
                    "age_escalation must be ordered by strictly descending days_over".to_string(),
                ));
            }
        }
        for step in &self.age_escalation {
            non_negative("age_escalation.bonus", step.bonus)?;
        }

        for kw in &mut self.keywords {
            kw.keyword = normalized_keyword("keywords", &kw.keyword)?;
            non_negative("keywords.weight", kw.weight)?;
        }
        for m in &mut self.category_multipliers {
            m.keyword = normalized_keyword("category_multipliers", &m.keyword)?;
            non_negative("category_multipliers.factor", m.factor)?;
        }

        Ok(self)
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRules(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

fn normalized_keyword(table: &str, keyword: &str) -> Result<String> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(Error::InvalidRules(format!("{} contains a blank keyword", table)));
    }
    Ok(keyword.to_string())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
