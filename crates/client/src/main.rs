//! Expedition planner client binary.
//!
//! Composition root: loads the mission configuration (TOML) and the
//! scanner's survey data (JSON), runs one solve, and prints the resulting
//! work orders. The solve itself lives in `planner-core`; this binary only
//! wires files to it and renders the outcome.
//!
//! # Examples
//!
//! ```bash
//! # Human-readable report
//! expedition --mission mission.toml --survey survey.json
//!
//! # Machine-readable plan for downstream tooling
//! expedition --mission mission.toml --survey survey.json --json
//! ```

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use planner_content::{MissionLoader, SurveyLoader};
use planner_core::plan_mission;

/// Assign agents to surveyed sites so resource targets are met with
/// maximum total yield.
#[derive(Parser)]
#[command(name = "expedition")]
#[command(about = "Mission assignment planner", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the mission TOML (agents, targets, optional aliases)
    #[arg(long)]
    mission: PathBuf,

    /// Path to the survey JSON produced by the scanner
    #[arg(long)]
    survey: PathBuf,

    /// Emit the plan as JSON instead of the textual report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MissionLoader::load(&cli.mission)
        .with_context(|| format!("loading mission {}", cli.mission.display()))?;
    let sites = SurveyLoader::load(&cli.survey)
        .with_context(|| format!("loading survey {}", cli.survey.display()))?;

    tracing::info!(
        agents = config.agents.len(),
        sites = sites.len(),
        targets = config.targets.0.len(),
        "solving mission assignment"
    );

    let plan = plan_mission(&config.agents, &sites, &config.targets)
        .context("mission configuration rejected")?;

    tracing::info!(total_yield = plan.total_yield, fully_met = plan.is_fully_met(), "solve finished");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::render_plan(&plan));
    }

    Ok(())
}
