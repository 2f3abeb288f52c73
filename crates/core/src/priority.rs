// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic priority scoring.
//!
//! An issue's score starts from its base priority, gains an age bonus and
//! keyword bonuses, and is then scaled by every category multiplier whose
//! keyword appears in the issue's category. The score maps onto a
//! [`Tier`] through fixed thresholds.
//!
//! ```text
//! low, 10 days old, "System outage", category "billing"
//!   25 base + 10 age + 15 "outage" = 50, x1.4 billing = 70  -> medium
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::issue::{Issue, Priority};
use crate::rules::{ScoringRules, TierThresholds};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Coarse derived priority bucket.
///
/// There is deliberately no critical tier: a critical base priority can
/// only ever land in [`Tier::High`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// Maps a score onto a tier. Monotonic in `score`.
    pub fn from_score(score: f64, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.high {
            Tier::High
        } else if score >= thresholds.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Tier::High),
            "medium" => Ok(Tier::Medium),
            "low" => Ok(Tier::Low),
            _ => Err(Error::InvalidTier(s.to_string())),
        }
    }
}

/// A category multiplier that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct AppliedMultiplier {
    pub keyword: String,
    pub factor: f64,
}

/// The components a score was built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ScoreBreakdown {
    /// Score contributed by the base priority.
    pub base: f64,
    /// Age escalation bonus.
    pub age_bonus: f64,
    /// Sum of keyword weights.
    pub keyword_bonus: f64,
    /// Keywords found in the title or description, in rule order.
    pub matched_keywords: Vec<String>,
    /// Multipliers applied to the additive subtotal, in rule order.
    pub multipliers: Vec<AppliedMultiplier>,
}

/// Derived priority for one issue at one instant. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DynamicPriority {
    pub final_priority: Tier,
    pub priority_score: f64,
    pub days_open: u32,
    pub original_priority: Option<Priority>,
    pub breakdown: ScoreBreakdown,
}

/// Scores issues against a rule set and a clock.
pub struct PriorityCalculator<C: Clock = SystemClock> {
    rules: ScoringRules,
    clock: C,
}

impl PriorityCalculator<SystemClock> {
    /// Creates a calculator with the stock rules and the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PriorityCalculator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PriorityCalculator<C> {
    /// Creates a calculator with the stock rules and a custom clock.
    pub fn with_clock(clock: C) -> Self {
        PriorityCalculator {
            rules: ScoringRules::default(),
            clock,
        }
    }

    /// Creates a calculator with custom rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRules`] if the rules fail validation.
    pub fn with_rules(rules: ScoringRules, clock: C) -> Result<Self> {
        Ok(PriorityCalculator {
            rules: rules.validated()?,
            clock,
        })
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Reads the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Scores an issue at the clock's current instant.
    pub fn calculate(&self, issue: &Issue) -> Result<DynamicPriority> {
        self.calculate_at(issue, self.clock.now())
    }

    /// Scores an issue at a given instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the issue's created date cannot be
    /// parsed.
    pub fn calculate_at(&self, issue: &Issue, now: DateTime<Utc>) -> Result<DynamicPriority> {
        let created = issue.created()?;
        let days_open = days_between(created, now, issue);
        let rules = &self.rules;

        let base = match issue.priority {
            Some(Priority::Critical) => rules.base.critical,
            Some(Priority::High) => rules.base.high,
            Some(Priority::Medium) => rules.base.medium,
            Some(Priority::Low) => rules.base.low,
            None => rules.base.unset,
        };

        let age_bonus = rules
            .age_escalation
            .iter()
            .find(|step| days_open > step.days_over)
            .map_or(0.0, |step| step.bonus);

        let text = issue.scan_text();
        let mut keyword_bonus = 0.0;
        let mut matched_keywords = Vec::new();
        for kw in &rules.keywords {
            if text.contains(kw.keyword.as_str()) {
                keyword_bonus += kw.weight;
                matched_keywords.push(kw.keyword.clone());
            }
        }

        let mut score = base + age_bonus + keyword_bonus;

        let category = issue.category.as_deref().unwrap_or_default().to_lowercase();
        let mut multipliers = Vec::new();
        for m in &rules.category_multipliers {
            if category.contains(m.keyword.as_str()) {
                score *= m.factor;
                multipliers.push(AppliedMultiplier {
                    keyword: m.keyword.clone(),
                    factor: m.factor,
                });
            }
        }

        let final_priority = Tier::from_score(score, &rules.tiers);
        tracing::debug!(
            issue = issue.label(),
            score,
            days_open,
            tier = %final_priority,
            "scored issue"
        );

        Ok(DynamicPriority {
            final_priority,
            priority_score: score,
            days_open,
            original_priority: issue.priority,
            breakdown: ScoreBreakdown {
                base,
                age_bonus,
                keyword_bonus,
                matched_keywords,
                multipliers,
            },
        })
    }
}

/// Whole days elapsed, floored. Future-dated issues clamp to zero.
fn days_between(created: DateTime<Utc>, now: DateTime<Utc>, issue: &Issue) -> u32 {
    let days = now
        .signed_duration_since(created)
        .num_milliseconds()
        .div_euclid(MS_PER_DAY);
    if days < 0 {
        tracing::warn!(
            issue = issue.label(),
            created = %issue.created_date,
            "created date is in the future, treating as 0 days open"
        );
        return 0;
    }
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Scores an issue with the stock rules at `now`.
pub fn calculate_dynamic_priority(issue: &Issue, now: DateTime<Utc>) -> Result<DynamicPriority> {
    PriorityCalculator::new().calculate_at(issue, now)
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;
