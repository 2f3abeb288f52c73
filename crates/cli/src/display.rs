// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for command output.

use ct_core::{DynamicPriority, FilterSet, Issue, IssueStatistics, RankedIssue};

use crate::colors;

/// Format a ranked issue as a single line.
///
/// ```text
/// [high]   138.0  cs-1: Billing outage (10d)
/// ```
pub fn format_ranked_line(ranked: &RankedIssue<'_>) -> String {
    let tag = format!("{:<8}", format!("[{}]", ranked.tier()));
    format!(
        "{} {:>6.1}  {} ({}d)",
        colors::tier(&tag, ranked.tier()),
        ranked.score(),
        heading(ranked.issue),
        ranked.priority.days_open
    )
}

/// `id: title`, or just the title when the issue has no id.
fn heading(issue: &Issue) -> String {
    if issue.id.is_empty() {
        issue.title.clone()
    } else {
        format!("{}: {}", issue.id, issue.title)
    }
}

/// Describe the constrained filters, e.g. `regionType=county, channel=email`.
pub fn format_filters(filters: &FilterSet) -> String {
    let active: Vec<String> = filters
        .active()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    }
}

/// Format the statistics summary printed by `ct stats`.
pub fn format_statistics(stats: &IssueStatistics, filters: &FilterSet) -> String {
    let mut lines = vec![
        format!("Filters: {}", format_filters(filters)),
        format!(
            "Issues: {} ({} solved, {} unsolved)",
            stats.total_issues, stats.solved_issues, stats.unsolved_issues
        ),
        format!(
            "Priority: {} high, {} medium, {} low, {} critical",
            stats.high_priority, stats.medium_priority, stats.low_priority, stats.critical_priority
        ),
    ];

    if !stats.by_category.is_empty() {
        lines.push(String::new());
        lines.push(colors::header("By category:"));
        let width = stats.by_category.keys().map(|k| display_key(k).len()).max().unwrap_or(0);
        for (category, count) in &stats.by_category {
            lines.push(format!("  {:<width$}  {}", display_key(category), count, width = width));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn display_key(category: &str) -> &str {
    if category.is_empty() {
        "(none)"
    } else {
        category
    }
}

/// Format the score breakdown printed by `ct show`.
///
/// ```text
/// [high] cs-1: Billing outage
/// Score: 138.0 (10 days open)
///
/// Breakdown:
///   base priority (high)   75.0
///   age                   +10.0
///   keywords              +30.0  outage, billing
///   x1.2 technical
/// ```
pub fn format_breakdown(issue: &Issue, priority: &DynamicPriority) -> String {
    let breakdown = &priority.breakdown;
    let base_label = match priority.original_priority {
        Some(p) => format!("base priority ({})", p),
        None => "base priority (none)".to_string(),
    };

    let mut lines = vec![
        format!(
            "{} {}",
            colors::tier(&format!("[{}]", priority.final_priority), priority.final_priority),
            heading(issue)
        ),
        format!(
            "Score: {:.1} ({} {} open)",
            priority.priority_score,
            priority.days_open,
            if priority.days_open == 1 { "day" } else { "days" }
        ),
        format!("Created: {}", issue.created_date),
        format!("Status: {}", status_or_none(issue.status.as_str())),
    ];
    if let Some(category) = &issue.category {
        lines.push(format!("Category: {}", category));
    }
    if !issue.region_name.is_empty() || !issue.region_type.is_empty() {
        lines.push(format!("Region: {} ({})", issue.region_name, issue.region_type));
    }
    if !issue.channel.is_empty() {
        lines.push(format!("Channel: {}", issue.channel));
    }

    lines.push(String::new());
    lines.push(colors::header("Breakdown:"));
    lines.push(format!("  {:<22} {:>6.1}", base_label, breakdown.base));
    lines.push(format!("  {:<22} {:>+6.1}", "age", breakdown.age_bonus));
    let mut keyword_line = format!("  {:<22} {:>+6.1}", "keywords", breakdown.keyword_bonus);
    if !breakdown.matched_keywords.is_empty() {
        keyword_line.push_str("  ");
        keyword_line.push_str(&breakdown.matched_keywords.join(", "));
    }
    lines.push(keyword_line);
    for multiplier in &breakdown.multipliers {
        lines.push(format!("  x{} {}", multiplier.factor, multiplier.keyword));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn status_or_none(status: &str) -> &str {
    if status.is_empty() {
        "(none)"
    } else {
        status
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
