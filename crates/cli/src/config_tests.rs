// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use ct_core::FilterKey;
use tempfile::TempDir;

fn write_config(root: &Path, content: &str) -> PathBuf {
    let dir = root.join(CONFIG_DIR_NAME);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
    dir
}

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.input, None);
    assert!(config.filters.is_unconstrained());
    assert_eq!(config.scoring, ScoringRules::default());
}

#[test]
fn parses_input_filters_and_scoring() {
    let config = Config::from_toml(
        r#"
input = "data/issues.json"

[filters]
regionType = "county"
channel = "email"

[scoring.tiers]
high = 90.0
"#,
    )
    .unwrap();
    assert_eq!(config.input.as_deref(), Some("data/issues.json"));
    assert_eq!(config.filters.get(FilterKey::RegionType).as_str(), "county");
    assert_eq!(config.filters.get(FilterKey::Channel).as_str(), "email");
    assert_eq!(config.scoring.tiers.high, 90.0);
    assert_eq!(config.scoring.tiers.medium, 60.0);
}

#[test]
fn unknown_filter_key_in_config_is_rejected() {
    let err = Config::from_toml("[filters]\nteam = \"ops\"\n").unwrap_err();
    assert!(err.to_string().contains("unknown filter key"));
}

#[test]
fn invalid_scoring_rejected_when_building_calculator() {
    let config = Config::from_toml("[scoring.tiers]\nhigh = 10.0\nmedium = 50.0\n").unwrap();
    let err = config.calculator(Utc::now()).err().expect("inverted tiers must fail");
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn find_config_dir_walks_up() {
    let temp = TempDir::new().unwrap();
    let dir = write_config(temp.path(), "");
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    assert_eq!(find_config_dir(&nested), Some(dir));
}

#[test]
fn discover_resolves_input_against_project_root() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "input = \"issues.json\"\n");
    let nested = temp.path().join("sub");
    fs::create_dir_all(&nested).unwrap();

    let config = Config::discover(&nested).unwrap();
    assert_eq!(config.input_path(), Some(temp.path().join("issues.json")));
}

#[test]
fn absolute_input_is_kept() {
    let temp = TempDir::new().unwrap();
    let absolute = temp.path().join("elsewhere.json");
    let config = Config::from_toml(&format!("input = {:?}\n", absolute.display().to_string())).unwrap();
    assert_eq!(config.input_path(), Some(absolute));
}

#[test]
fn load_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let dir = write_config(temp.path(), "input = [\n");
    let err = Config::load(&dir).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn to_toml_round_trips() {
    let config = Config::from_toml("input = \"issues.jsonl\"\n[filters]\nstatus = \"open\"\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = Config::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.input, config.input);
    assert_eq!(reparsed.filters, config.filters);
    assert_eq!(reparsed.scoring, config.scoring);
}

#[test]
fn discover_without_project_config_uses_defaults_or_user_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::discover(temp.path()).unwrap();
    if let Some(path) = config.path() {
        assert!(!path.starts_with(temp.path()));
    } else {
        assert_eq!(config.input, None);
    }
}

#[test]
fn load_records_source_path() {
    let temp = TempDir::new().unwrap();
    let dir = write_config(temp.path(), "");
    let config = Config::load(&dir).unwrap();
    assert_eq!(config.path(), Some(dir.join(CONFIG_FILE_NAME).as_path()));
}
