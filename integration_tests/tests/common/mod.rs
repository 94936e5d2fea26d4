use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> Result<Value> {
    let path = fixture_path(name);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("missing fixture at {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("fixture {} is not valid JSON", path.display()))
}

/// Payload fixtures, excluding config files.
#[allow(dead_code)]
pub const PAYLOAD_FIXTURES: [&str; 4] = [
    "apps_script_five.json",
    "asi_birth_indexes.json",
    "sheet_row_strings.json",
    "malformed.json",
];
