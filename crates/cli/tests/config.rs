// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn config_supplies_input_and_filters() {
    let temp = fixture();
    write_config(
        temp.path(),
        "input = \"issues.json\"\n\n[filters]\nregionName = \"Travis\"\n",
    );
    let json = stdout_json(ct_in(temp.path()).args(["stats", "-o", "json"]));
    assert_eq!(json["total_issues"], 3);
    assert_eq!(json["filters"]["regionName"], "Travis");
}

#[test]
fn flag_all_clears_config_filter() {
    let temp = fixture();
    write_config(
        temp.path(),
        "input = \"issues.json\"\n\n[filters]\nregionName = \"Travis\"\n",
    );
    let json = stdout_json(ct_in(temp.path()).args(["stats", "--region-name", "all", "-o", "json"]));
    assert_eq!(json["total_issues"], 5);
}

#[test]
fn config_found_from_subdirectory() {
    let temp = fixture();
    write_config(temp.path(), "input = \"issues.json\"\n");
    let nested = temp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    let json = stdout_json(ct_in(&nested).args(["stats", "-o", "json"]));
    assert_eq!(json["total_issues"], 5);
}

#[test]
fn scoring_overrides_change_tiers() {
    let temp = fixture();
    write_config(
        temp.path(),
        "input = \"issues.json\"\n\n[scoring.tiers]\nhigh = 60.0\nmedium = 52.0\n",
    );
    let json = stdout_json(ct_in(temp.path()).args(["stats", "-o", "json"]));
    assert_eq!(json["high_priority"], 3);
    assert_eq!(json["medium_priority"], 1);
    assert_eq!(json["low_priority"], 1);
}

#[test]
fn invalid_scoring_rules_fail() {
    let temp = fixture();
    write_config(
        temp.path(),
        "input = \"issues.json\"\n\n[scoring.tiers]\nhigh = 50.0\nmedium = 80.0\n",
    );
    ct_in(temp.path())
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scoring rules"));
}

#[test]
fn malformed_config_fails() {
    let temp = fixture();
    write_config(temp.path(), "input = [");
    ct_in(temp.path())
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn config_path_prints_file() {
    let temp = fixture();
    let path = write_config(temp.path(), "");
    ct_in(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()));
}

#[test]
fn config_show_prints_toml() {
    let temp = fixture();
    write_config(temp.path(), "input = \"issues.json\"\n");
    ct_in(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input = \"issues.json\""))
        .stdout(predicate::str::contains("[scoring.tiers]"));
}

#[test]
fn schema_and_completion_need_no_input() {
    let temp = TempDir::new().unwrap();
    ct_in(temp.path())
        .args(["schema", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ListOutputJson"));
    ct_in(temp.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_ct"));
}
