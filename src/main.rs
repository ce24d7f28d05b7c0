use anyhow::Context;
use clap::Parser;
use finboard::config::ConfigManager;
use finboard::data::{ScenarioLoader, SnapshotConnector};
use finboard::types::ScenarioAdjustments;
use finboard::MetricsEngine;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finboard")]
#[command(about = "Project cash, risk and runway from a finance spreadsheet export")]
struct Cli {
    /// Field/value CSV export of the finance spreadsheet
    #[arg(short, long, value_name = "CSV")]
    snapshot: PathBuf,

    /// Scenario knobs (TOML); defaults to the current plan
    #[arg(long, value_name = "TOML")]
    scenario: Option<PathBuf>,

    /// Config file (TOML); FINBOARD_* environment variables override it
    #[arg(short, long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let manager = ConfigManager::new();
    if let Some(path) = &cli.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?;
    }
    let config = manager.get()?;

    let snapshot = SnapshotConnector::load_snapshot(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?;

    let adjustments = match &cli.scenario {
        Some(path) => ScenarioLoader::load(path, &config.scenario)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioAdjustments::default(),
    };

    let engine = MetricsEngine::new(&config.scenario);
    let report = engine.report(Some(&snapshot), Some(&adjustments));

    let rendered = report.to_json(snapshot.as_of, chrono::Utc::now(), cli.compact)?;
    println!("{}", rendered);

    Ok(())
}
