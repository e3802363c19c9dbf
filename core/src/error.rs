//! Error types for mlbridge-rs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mlbridge-rs operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while loading or running a model.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Model loading failed.
    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    /// Inference failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

impl BridgeError {
    /// Create a model load error.
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BridgeError::model_load("failed to load");
        assert_eq!(format!("{}", err), "Model loading failed: failed to load");

        let err = BridgeError::inference("runtime rejected input");
        assert_eq!(format!("{}", err), "Inference failed: runtime rejected input");

        let err = BridgeError::FileNotFound(PathBuf::from("/path/to/model.mlmodel"));
        assert_eq!(format!("{}", err), "File not found: /path/to/model.mlmodel");
    }
}
