// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::fs;
use tempfile::TempDir;

const ISSUE_A: &str = r#"{"id": "a", "title": "Outage", "createdDate": "2026-05-01"}"#;
const ISSUE_B: &str = r#"{"id": "b", "title": "Question", "createdDate": "2026-05-02"}"#;

#[test]
fn read_jsonl_skips_blank_lines() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.jsonl");
    fs::write(&path, format!("{}\n\n   \n{}\n", ISSUE_A, ISSUE_B)).unwrap();

    let issues = read_jsonl(&path).unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].id, "a");
    assert_eq!(issues[1].id, "b");
}

#[test]
fn read_jsonl_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.jsonl");
    fs::write(&path, format!("{}\n{{not json}}\n", ISSUE_A)).unwrap();

    let err = read_jsonl(&path).unwrap_err();
    assert!(matches!(err, Error::ParseLine { line: 2, .. }));
}

#[test]
fn read_jsonl_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = read_jsonl(&temp.path().join("missing.jsonl")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn parse_json_flat_array() {
    let categories = parse_json(&format!("[{}, {}]", ISSUE_A, ISSUE_B)).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[ALL_CATEGORY].issues.len(), 2);
}

#[test]
fn parse_json_categories_keep_order() {
    let doc = format!(
        r#"{{"zeta": {{"name": "Zeta", "issues": [{}]}}, "alpha": {{"name": "Alpha", "issues": [{}]}}}}"#,
        ISSUE_A, ISSUE_B
    );
    let categories = parse_json(&doc).unwrap();
    let keys: Vec<&str> = categories.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    assert_eq!(categories["alpha"].name, "Alpha");
}

#[test]
fn parse_json_category_without_issues() {
    let categories = parse_json(r#"{"empty": {"name": "Empty"}}"#).unwrap();
    assert!(categories["empty"].issues.is_empty());
}

#[test]
fn parse_json_rejects_garbage() {
    assert!(matches!(parse_json("{oops"), Err(Error::Json(_))));
}

#[test]
fn load_picks_layout_by_extension() {
    let temp = TempDir::new().unwrap();
    let jsonl = temp.path().join("issues.JSONL");
    fs::write(&jsonl, format!("{}\n", ISSUE_A)).unwrap();
    let json = temp.path().join("issues.json");
    fs::write(&json, format!("[{}]", ISSUE_B)).unwrap();

    assert_eq!(load(&jsonl).unwrap()[ALL_CATEGORY].issues[0].id, "a");
    assert_eq!(load(&json).unwrap()[ALL_CATEGORY].issues[0].id, "b");
}
