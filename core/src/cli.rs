//! Command-line interface for mlbridge-rs.

use clap::Parser;
use std::path::PathBuf;

/// Run on-device text-model inference through the bridge.
#[derive(Parser, Debug)]
#[command(name = "mlbridge-rs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the model file.
    ///
    /// May also be supplied through the config file.
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Compute units to run on (all, cpu, gpu).
    #[arg(short, long, default_value = "all")]
    pub units: String,

    /// Prompt text to submit to the model.
    ///
    /// Required for inference mode.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Output format (json, pretty).
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Path to optional YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run health checks instead of normal inference.
    ///
    /// Health checks report bridge and runtime versions, validate the
    /// compute units, and run model load validation plus an inference
    /// smoke test when --model and --prompt are supplied.
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
