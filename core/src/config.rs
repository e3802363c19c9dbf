//! Configuration types for mlbridge-rs.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Model configuration.
    #[serde(default)]
    pub model: ModelConfig,
}

/// Model configuration.
#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    /// Path to the model file.
    #[serde(default)]
    pub path: Option<String>,

    /// Compute units to run inference on.
    #[serde(default = "default_compute_units")]
    pub compute_units: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: None,
            compute_units: default_compute_units(),
        }
    }
}

fn default_compute_units() -> String {
    "all".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> crate::error::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
