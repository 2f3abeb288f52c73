// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::clock::FixedClock;
use crate::filter::FilterKey;
use crate::issue::Priority;
use chrono::{Duration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

fn calculator() -> PriorityCalculator<FixedClock> {
    PriorityCalculator::with_clock(FixedClock(now()))
}

fn aged(id: &str, days: i64) -> Issue {
    Issue::created_at(id, "Portal question", now() - Duration::days(days))
}

fn categories() -> IssueCategories {
    let mut categories = IssueCategories::new();
    categories.insert(
        "technical".into(),
        IssueCategory {
            name: "Technical".into(),
            issues: vec![
                // 75 + 40 = 115 -> high
                aged("t1", 31)
                    .with_priority(Priority::High)
                    .with_issue_category("technical")
                    .with_channel("email")
                    .with_status(IssueStatus::Unsolved),
                // 50 -> low
                aged("t2", 0)
                    .with_priority(Priority::Medium)
                    .with_issue_category("technical")
                    .with_channel("phone")
                    .with_status(IssueStatus::Solved),
            ],
        },
    );
    categories.insert(
        "billing".into(),
        IssueCategory {
            name: "Billing".into(),
            issues: vec![
                // 75 -> medium
                aged("b1", 0)
                    .with_priority(Priority::Critical)
                    .with_issue_category("billing")
                    .with_channel("email")
                    .with_status(IssueStatus::Other("pending".into())),
                // 25 -> low
                aged("b2", 2)
                    .with_priority(Priority::Low)
                    .with_issue_category("billing")
                    .with_channel("email")
                    .with_status(IssueStatus::Solved),
            ],
        },
    );
    categories
}

#[test]
fn flatten_follows_category_then_issue_order() {
    let categories = categories();
    let order: Vec<&str> = flatten(&categories).map(|i| i.id.as_str()).collect();
    assert_eq!(order, vec!["t1", "t2", "b1", "b2"]);
}

#[test]
fn unfiltered_statistics() {
    let stats = calculate_issue_statistics(&categories(), &FilterSet::new(), &calculator()).unwrap();
    assert_eq!(stats.total_issues, 4);
    assert_eq!(stats.solved_issues, 2);
    assert_eq!(stats.unsolved_issues, 1);
    assert_eq!(stats.high_priority, 1);
    assert_eq!(stats.medium_priority, 1);
    assert_eq!(stats.low_priority, 2);
    assert_eq!(stats.critical_priority, 0);
    assert_eq!(stats.by_category.get("technical"), Some(&2));
    assert_eq!(stats.by_category.get("billing"), Some(&2));
}

#[test]
fn tier_buckets_sum_to_total() {
    let filters = FilterSet::new().with(FilterKey::Channel, "email");
    let stats = calculate_issue_statistics(&categories(), &filters, &calculator()).unwrap();
    assert_eq!(stats.total_issues, 3);
    assert_eq!(stats.tier_total(), stats.total_issues);
    assert!(stats.solved_issues + stats.unsolved_issues <= stats.total_issues);
}

#[test]
fn critical_bucket_stays_empty_for_critical_issues() {
    let mut categories = IssueCategories::new();
    categories.insert(
        "all".into(),
        IssueCategory {
            name: "All".into(),
            issues: vec![aged("c1", 60).with_priority(Priority::Critical).with_description("critical outage")],
        },
    );
    let stats = calculate_issue_statistics(&categories, &FilterSet::new(), &calculator()).unwrap();
    assert_eq!(stats.critical_priority, 0);
    assert_eq!(stats.high_priority, 1);
}

#[test]
fn filtered_out_issues_are_not_scored() {
    let mut categories = categories();
    categories.insert(
        "broken".into(),
        IssueCategory {
            name: "Broken".into(),
            issues: vec![Issue::new("x1", "Portal question", "garbage").with_channel("fax")],
        },
    );
    let filters = FilterSet::new().with(FilterKey::Channel, "email");
    let stats = calculate_issue_statistics(&categories, &filters, &calculator()).unwrap();
    assert_eq!(stats.total_issues, 3);
}

#[test]
fn invalid_date_fails_the_whole_batch() {
    let mut categories = categories();
    categories.insert(
        "broken".into(),
        IssueCategory {
            name: "Broken".into(),
            issues: vec![Issue::new("x1", "Portal question", "garbage")],
        },
    );
    let err = calculate_issue_statistics(&categories, &FilterSet::new(), &calculator()).unwrap_err();
    assert!(err.to_string().contains("x1"));
}

#[test]
fn empty_categories_produce_zeroes() {
    let stats = calculate_issue_statistics(&IssueCategories::new(), &FilterSet::new(), &calculator()).unwrap();
    assert_eq!(stats, IssueStatistics::default());
}

#[test]
fn tally_counts_unfiltered_slice() {
    let issues = vec![aged("a", 0), aged("b", 40).with_priority(Priority::High)];
    let stats = tally(&issues, &calculator(), now()).unwrap();
    assert_eq!(stats.total_issues, 2);
    assert_eq!(stats.high_priority, 1);
    assert_eq!(stats.low_priority, 1);
    assert_eq!(stats.by_category.get(""), Some(&2));
}

#[test]
fn categories_deserialize_in_document_order() {
    let json = r#"{
        "zeta": {"name": "Zeta", "issues": [{"title": "z", "createdDate": "2026-05-01"}]},
        "alpha": {"name": "Alpha", "issues": [{"title": "a", "createdDate": "2026-05-01"}]}
    }"#;
    let categories: IssueCategories = serde_json::from_str(json).unwrap();
    let keys: Vec<&str> = categories.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}
