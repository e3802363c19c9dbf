use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use mlbridge_rs::{BridgeError, ComputeUnits, Model};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../models/test.mlmodel")
}

#[test]
fn predict_on_fixture_model() -> Result<()> {
    let model =
        Model::load(fixture_path(), ComputeUnits::All).context("Failed to load fixture model")?;

    let response = model.predict("hello")?;
    assert!(!response.is_empty());
    assert!(response.contains("hello"));
    Ok(())
}

#[test]
fn repeated_predict_is_deterministic() -> Result<()> {
    let model = Model::load(fixture_path(), ComputeUnits::Cpu)?;

    let first = model.predict("same input")?;
    let second = model.predict("same input")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn load_missing_model_fails() {
    let err = Model::load("does/not/exist.mlmodel", ComputeUnits::All).unwrap_err();
    assert!(matches!(err, BridgeError::FileNotFound(_)));
}

#[test]
fn load_rejects_wrong_format() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "definitely not a model")?;

    let err = Model::load(file.path(), ComputeUnits::All).unwrap_err();
    assert!(matches!(err, BridgeError::ModelLoad(_)));
    Ok(())
}

#[test]
fn model_survives_failed_predict() -> Result<()> {
    let model = Model::load(fixture_path(), ComputeUnits::All)?;

    // Interior NUL cannot cross the boundary; the call fails but the
    // handle must stay usable.
    let err = model.predict("bad\0input").unwrap_err();
    assert!(matches!(err, BridgeError::Inference(_)));

    let response = model.predict("still works")?;
    assert!(response.contains("still works"));
    Ok(())
}
