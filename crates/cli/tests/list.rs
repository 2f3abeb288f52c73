// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn list_ranks_by_score() {
    let temp = fixture();
    let json = stdout_json(ct_in(temp.path()).args(["list", "-i", "issues.json", "-o", "json"]));
    assert_eq!(ids(&json), vec!["cs-1", "cs-5", "cs-2", "cs-3", "cs-4"]);

    let scores: Vec<f64> = json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn list_text_lines() {
    let temp = fixture();
    ct_in(temp.path())
        .args(["list", "-i", "issues.json", "--tier", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[high]"))
        .stdout(predicate::str::contains("cs-1: Billing outage (10d)"))
        .stdout(predicate::str::contains("cs-5: Portal down (40d)"))
        .stdout(predicate::str::contains("cs-2").not());
}

#[test]
fn list_tier_and_limit() {
    let temp = fixture();
    let json = stdout_json(ct_in(temp.path()).args(["list", "-i", "issues.json", "-t", "low", "-n", "1", "-o", "json"]));
    assert_eq!(ids(&json), vec!["cs-3"]);
}

#[test]
fn list_with_filter() {
    let temp = fixture();
    let json = stdout_json(ct_in(temp.path()).args(["list", "-i", "issues.json", "-c", "access", "-s", "open", "-o", "json"]));
    assert_eq!(ids(&json), vec!["cs-3", "cs-4"]);
}

#[test]
fn list_empty_result() {
    let temp = fixture();
    ct_in(temp.path())
        .args(["list", "-i", "issues.json", "--channel", "fax"])
        .assert()
        .success()
        .stdout("No issues found.\n");
}

#[test]
fn list_age_moves_with_now() {
    let temp = fixture();
    let json = stdout_json(
        ct()
            .current_dir(temp.path())
            .args(["--now", "2026-02-20", "list", "-i", "issues.json", "-o", "json"]),
    );
    let days_open = |id: &str| {
        json["issues"]
            .as_array()
            .unwrap()
            .iter()
            .find(|issue| issue["id"] == id)
            .map(|issue| issue["days_open"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(days_open("cs-1"), 1);
    assert_eq!(days_open("cs-5"), 31);
    // Created after --now: clamped rather than negative.
    assert_eq!(days_open("cs-3"), 0);
    assert_eq!(ids(&json), vec!["cs-5", "cs-1", "cs-2", "cs-3", "cs-4"]);
}
