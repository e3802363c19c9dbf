//! Safe wrappers for the native text-model runtime.
//!
//! This module provides type-safe Rust wrappers around the runtime FFI
//! bindings for loading models and running text inference.

use std::ffi::{CStr, CString};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use super::ffi;
use crate::error::{BridgeError, Result};

/// Compute units the runtime may schedule inference on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComputeUnits {
    /// Let the runtime pick between CPU, GPU, and accelerators.
    #[default]
    All,
    /// Restrict execution to the CPU.
    Cpu,
    /// Prefer the GPU.
    Gpu,
}

impl FromStr for ComputeUnits {
    type Err = BridgeError;

    /// Parse a compute-units string like "all", "cpu", "gpu".
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "cpu" => Ok(Self::Cpu),
            "gpu" => Ok(Self::Gpu),
            other => Err(BridgeError::config(format!(
                "Invalid compute units: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ComputeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Cpu => write!(f, "cpu"),
            Self::Gpu => write!(f, "gpu"),
        }
    }
}

/// Get the last error message from the native runtime.
fn get_last_error() -> String {
    unsafe {
        let err_ptr = ffi::mlrt_last_error();
        if err_ptr.is_null() {
            "Unknown error".to_string()
        } else {
            CStr::from_ptr(err_ptr).to_string_lossy().into_owned()
        }
    }
}

/// Version string reported by the native runtime.
pub fn runtime_version() -> String {
    unsafe {
        let ptr = ffi::mlrt_version();
        if ptr.is_null() {
            "unknown".to_string()
        } else {
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        }
    }
}

/// Loaded text model.
///
/// Owns the native handle and releases it on drop, so a handle can never
/// be used after release or released twice through this type.
///
/// `Model` is `Send` but not `Sync`: the runtime makes no guarantee about
/// concurrent inference on one handle, so sharing a model across threads
/// requires external serialization (or one model per worker).
///
/// # Example
///
/// ```ignore
/// use mlbridge_rs::runtime::{ComputeUnits, Model};
///
/// let model = Model::load("models/test.mlmodel", ComputeUnits::All)?;
/// let response = model.predict("hello")?;
/// println!("{}", response);
/// // The native handle is released when `model` goes out of scope.
/// ```
#[derive(Debug)]
pub struct Model {
    handle: ffi::RuntimeModelHandle,
    units: ComputeUnits,
}

// SAFETY: the handle is an exclusively owned runtime resource and may move
// between threads. `Sync` is withheld: concurrent inference on one handle
// is unverified for the runtime.
unsafe impl Send for Model {}

impl Model {
    /// Load a model from a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the model file
    /// * `units` - Compute units to run inference on
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or the runtime rejects
    /// the model.
    pub fn load(path: impl AsRef<Path>, units: ComputeUnits) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BridgeError::FileNotFound(path.to_path_buf()));
        }

        let path_str = path.to_string_lossy();
        let path_cstr = CString::new(path_str.as_ref())
            .map_err(|_| BridgeError::model_load("Invalid path encoding"))?;

        let units_str = units.to_string();
        let units_cstr = CString::new(units_str)
            .map_err(|_| BridgeError::model_load("Invalid compute units string"))?;

        let handle = unsafe { ffi::mlrt_model_load(path_cstr.as_ptr(), units_cstr.as_ptr()) };

        if handle.is_null() {
            Err(BridgeError::model_load(format!(
                "Failed to load model: {}",
                get_last_error()
            )))
        } else {
            info!("Model loaded: {}", path.display());
            Ok(Self { handle, units })
        }
    }

    /// Get the compute units this model runs on.
    pub fn compute_units(&self) -> ComputeUnits {
        self.units
    }

    /// Run one inference against the loaded model.
    ///
    /// A failed call reports through the returned error and leaves the
    /// model usable for further predictions.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot cross the boundary or the
    /// runtime fails to produce a response.
    pub fn predict(&self, input: &str) -> Result<String> {
        let input_cstr = CString::new(input)
            .map_err(|_| BridgeError::inference("Input contains an interior NUL byte"))?;

        let out = unsafe { ffi::mlrt_model_predict(self.handle, input_cstr.as_ptr()) };

        if out.is_null() {
            return Err(BridgeError::inference(format!(
                "Inference failed: {}",
                get_last_error()
            )));
        }

        let response = unsafe { CStr::from_ptr(out).to_string_lossy().into_owned() };
        unsafe {
            ffi::mlrt_string_free(out);
        }

        debug!(
            "Inference completed: {} chars in, {} chars out",
            input.len(),
            response.len()
        );
        Ok(response)
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe {
                ffi::mlrt_model_free(self.handle);
            }
        }
    }
}
