//! Headless Shock Runner
//!
//! Applies one shock to a preset ecosystem and prints the outcome as JSON or text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use food_web_lab::core::config::config;
use food_web_lab::core::error::Result;
use food_web_lab::ecosystem::{load_preset, EcosystemPreset};
use food_web_lab::render::{species_metrics, RenderSink, SpeciesMetric, TextRenderer};
use food_web_lab::simulation::{Effect, ShockSpec};
use food_web_lab::{PopulationMap, Species};
use serde::Serialize;

/// Headless Shock Runner - one shock, one hop, printed
#[derive(Parser, Debug)]
#[command(name = "shock_runner")]
#[command(about = "Shock one species of a food web and report the one-hop fallout")]
struct Args {
    /// Ecosystem preset file (TOML); the built-in simple chain when omitted
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Species to shock
    #[arg(long)]
    target: String,

    /// Remove the target entirely
    #[arg(long, conflicts_with = "percent")]
    remove: bool,

    /// Change the target by this percent (-100..=100)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "remove")]
    percent: Option<i32>,

    /// Override the preset's removal factor (0, 1]
    #[arg(long)]
    removal_factor: Option<f64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct RunReport {
    ecosystem: String,
    target: Species,
    shock: ShockSpec,
    removal_factor: f64,
    before: PopulationMap,
    after: PopulationMap,
    effects: Vec<Effect>,
    log: Vec<String>,
    metrics: Vec<SpeciesMetric>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_web_lab=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shock_runner: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut ecosystem = match &args.preset {
        Some(path) => load_preset(path)?,
        None => EcosystemPreset::simple_chain(),
    };
    if let Some(factor) = args.removal_factor {
        ecosystem.removal_factor = factor;
    }

    let shock = match args.percent {
        Some(p) if !args.remove => ShockSpec::try_adjust(p)?,
        _ => ShockSpec::Remove,
    };
    let target = Species::from(args.target.as_str());

    let result = ecosystem.run(&target, shock, config().factors)?;
    let metrics = species_metrics(
        &ecosystem.graph,
        &ecosystem.initial_population,
        &result.population,
    );

    match args.format.as_str() {
        "text" => {
            let mut renderer = TextRenderer::new(std::io::stdout());
            println!(
                "Ecosystem: {} (removal factor {})",
                ecosystem.name, ecosystem.removal_factor
            );
            println!("Shock: {} {}", target, shock);
            renderer.draw(
                "After",
                &ecosystem.graph,
                &result.population,
                &ecosystem.initial_population,
            )?;
            println!("Log:");
            renderer.log(&result.effects)?;
            println!("Changes:");
            renderer.metrics(&metrics)?;
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            let report = RunReport {
                ecosystem: ecosystem.name.clone(),
                target,
                shock,
                removal_factor: ecosystem.removal_factor,
                before: ecosystem.initial_population.clone(),
                log: result.log_lines(),
                after: result.population,
                effects: result.effects,
                metrics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
