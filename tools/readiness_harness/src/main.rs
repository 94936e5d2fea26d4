use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use readiness_core::{
    build_report, load_countdown_config_from_env, normalize_payload, CountdownConfig,
    FormulaSet, ReadinessSnapshot,
};
use serde_json::Value as JsonValue;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute the ASI countdown report for one payload", long_about = None)]
struct Args {
    /// Path to a dashboard payload JSON file (defaults to the fallback snapshot)
    #[arg(long)]
    payload: Option<PathBuf>,

    /// Comma-separated formula generations: science, convergence, curve, civilization, legacy, all
    #[arg(long, default_value = "all")]
    formulas: FormulaSet,

    /// Countdown tuning file (defaults to $COUNTDOWN_CONFIG_PATH, then the builtin)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the normalized snapshot instead of the report
    #[arg(long)]
    snapshot_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let snapshot = match &args.payload {
        Some(path) => normalize_payload(&read_payload(path)?),
        None => ReadinessSnapshot::fallback(),
    };

    if args.snapshot_only {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let report = build_report(&snapshot, &config, args.formulas);
    tracing::info!(
        formulas = ?args.formulas,
        timestamp = snapshot.timestamp.as_deref().unwrap_or("-"),
        "report computed"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Arc<CountdownConfig>> {
    match path {
        Some(path) => {
            let config = CountdownConfig::from_file(path)
                .with_context(|| format!("Failed to load countdown config {}", path.display()))?;
            Ok(Arc::new(config))
        }
        None => Ok(load_countdown_config_from_env().0),
    }
}

fn read_payload(path: &Path) -> Result<JsonValue> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload at {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse payload JSON at {}", path.display()))
}
