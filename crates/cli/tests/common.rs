// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The instant every integration test scores against.
pub const NOW: &str = "2026-03-01T00:00:00Z";

/// Five issues in two categories.
///
/// At [`NOW`]: cs-1 high (138), cs-5 high (130), cs-2 medium (70),
/// cs-3 low (55), cs-4 low (50).
pub const ISSUES_JSON: &str = r#"{
  "billing": {
    "name": "Billing",
    "issues": [
      {
        "id": "cs-1",
        "title": "Billing outage",
        "priority": "high",
        "category": "technical",
        "createdDate": "2026-02-19T00:00:00Z",
        "status": "unsolved",
        "regionType": "county",
        "regionName": "Travis",
        "issueCategory": "billing",
        "channel": "email",
        "workflowStatus": "open"
      },
      {
        "id": "cs-2",
        "title": "System outage",
        "priority": "low",
        "category": "billing",
        "createdDate": "2026-02-19T00:00:00Z",
        "status": "solved",
        "regionType": "county",
        "regionName": "Hays",
        "issueCategory": "billing",
        "channel": "phone",
        "workflowStatus": "closed"
      }
    ]
  },
  "support": {
    "name": "Support",
    "issues": [
      {
        "id": "cs-3",
        "title": "Slow page",
        "priority": "medium",
        "createdDate": "2026-02-27",
        "status": "unsolved",
        "regionType": "state",
        "regionName": "Texas",
        "issueCategory": "access",
        "channel": "email",
        "workflowStatus": "open"
      },
      {
        "id": "cs-4",
        "title": "Question",
        "priority": "someday",
        "createdDate": "2026-02-28T00:00:00",
        "status": "pending",
        "regionType": "county",
        "regionName": "Travis",
        "issueCategory": "access",
        "channel": "chat",
        "workflowStatus": "open"
      },
      {
        "id": "cs-5",
        "title": "Portal down",
        "priority": "critical",
        "createdDate": "2026-01-20T00:00:00Z",
        "status": "unsolved",
        "regionType": "county",
        "regionName": "Travis",
        "issueCategory": "access",
        "channel": "email",
        "workflowStatus": "escalated"
      }
    ]
  }
}"#;

pub fn ct() -> Command {
    let mut cmd = cargo_bin_cmd!("ct");
    cmd.env_remove("CT_INPUT")
        .env_remove("CT_NOW")
        .env_remove("CT_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// `ct` pinned to [`NOW`] and run inside `dir`.
pub fn ct_in(dir: &Path) -> Command {
    let mut cmd = ct();
    cmd.arg("--now").arg(NOW).current_dir(dir);
    cmd
}

/// Temp directory holding `issues.json` with [`ISSUES_JSON`].
pub fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("issues.json"), ISSUES_JSON).unwrap();
    temp
}

/// Writes `.caretriage/config.toml` under `root`.
pub fn write_config(root: &Path, content: &str) -> PathBuf {
    let dir = root.join(".caretriage");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Parses command stdout as JSON.
pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
