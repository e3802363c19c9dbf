//! CLI entry point for mlbridge-rs.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mlbridge_rs::cli::Cli;
use mlbridge_rs::config::Config;
use mlbridge_rs::runtime::{runtime_version, ComputeUnits, Model};

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();

    let config = if let Some(config_path) = &cli.config {
        Config::from_yaml_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()))?
    } else {
        Config::default()
    };

    if cli.check {
        return run_check(&cli, &config);
    }

    let units: ComputeUnits = cli.units.parse()?;

    let Some(model_path) = model_path(&cli, &config) else {
        bail!("No model path given; use --model or a config file");
    };
    let Some(prompt) = cli.prompt else {
        bail!("No prompt given; use --prompt");
    };

    info!("Loading model: {}", model_path.display());
    let model = Model::load(&model_path, units)?;

    info!("Running inference...");
    let start = Instant::now();
    let response = model.predict(&prompt)?;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!("Inference complete in {:.2}ms", latency_ms);

    let output = serde_json::json!({
        "response": response,
        "latency_ms": latency_ms,
    });

    if cli.format == "pretty" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}

/// Model path from the command line, falling back to the config file.
fn model_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.model
        .clone()
        .or_else(|| config.model.path.as_ref().map(PathBuf::from))
}

/// Health-check mode: report versions and optionally validate a model.
fn run_check(cli: &Cli, config: &Config) -> Result<()> {
    println!("mlbridge-rs v{}", env!("CARGO_PKG_VERSION"));
    println!("runtime: {}", runtime_version());

    let units: ComputeUnits = cli.units.parse()?;
    println!("compute units: {}", units);

    let Some(model_path) = model_path(cli, config) else {
        println!("model: none given, load check skipped");
        return Ok(());
    };

    let model = Model::load(&model_path, units)?;
    println!("model: {} (loaded OK)", model_path.display());

    if let Some(prompt) = &cli.prompt {
        let response = model.predict(prompt)?;
        println!("smoke test: OK ({} chars out)", response.len());
    }

    Ok(())
}
