use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use jsonschema::JSONSchema;
use readiness_core::{report_from_payload, CountdownConfig, FormulaSet};
use readiness_schema::{report_schema, snapshot_schema};
use serde_json::Value;

const SCHEMA_DIR: &str = "readiness_schema/schema";
const FIXTURE_GLOB: &str = "integration_tests/tests/fixtures/*.json";

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("schema") => write_schemas(),
        Some("check-fixtures") => check_fixtures(),
        Some("help") | None => {
            print_usage();
            Ok(())
        }
        Some(cmd) => {
            eprintln!("Unknown xtask '{cmd}'.");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cargo xtask schema");
    eprintln!("       cargo xtask check-fixtures");
    eprintln!("       cargo xtask help");
}

fn write_schemas() -> Result<(), Box<dyn Error>> {
    let dir = Path::new(SCHEMA_DIR);
    fs::create_dir_all(dir)?;

    for (name, schema) in [
        ("dashboard_report.schema.json", report_schema()),
        ("readiness_snapshot.schema.json", snapshot_schema()),
    ] {
        let dest = dir.join(name);
        fs::write(&dest, serde_json::to_string_pretty(&schema)?)?;
        println!("Wrote {}", dest.display());
    }
    Ok(())
}

/// Build a full report for every payload fixture and validate it against the report schema.
fn check_fixtures() -> Result<(), Box<dyn Error>> {
    let schema = serde_json::to_value(report_schema())?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| format!("report schema is invalid: {err}"))?;
    let config = CountdownConfig::default();

    let mut checked = 0usize;
    for entry in glob::glob(FIXTURE_GLOB)? {
        let path = entry?;
        let is_config = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("countdown_config"));
        if is_config {
            continue;
        }

        let payload: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        let report = serde_json::to_value(report_from_payload(
            &payload,
            &config,
            FormulaSet::all(),
        ))?;
        if let Err(errors) = compiled.validate(&report) {
            let messages: Vec<String> = errors.map(|err| err.to_string()).collect();
            return Err(format!(
                "{} produced an invalid report: {}",
                path.display(),
                messages.join("; ")
            )
            .into());
        }
        println!("ok {}", path.display());
        checked += 1;
    }

    if checked == 0 {
        return Err(format!("no fixtures matched {FIXTURE_GLOB}").into());
    }
    Ok(())
}
