//! mlbridge-rs: C-ABI bridge for on-device text-model inference.
//!
//! This crate sits between an embedding application and a native
//! text-model runtime. It loads a model into an opaque handle, runs
//! single-shot text inference against it, and gives both sides of the
//! boundary unambiguous lifetime rules for every resource that crosses
//! it: one `load` pairs with one `release`, one `predict` result pairs
//! with one `free_result`.
//!
//! Three layers:
//!
//! - [`runtime`]: raw FFI bindings to the native runtime plus the safe
//!   [`Model`] wrapper with RAII release and `Result` errors.
//! - [`bridge`]: the exported C ABI (`load_model`, `release_model`,
//!   `predict`, `free_result`) declared in `include/mlbridge.h`, for
//!   callers in other languages.
//! - [`cli`] / [`config`]: a small binary for smoke-testing models from
//!   the command line.
//!
//! # Example
//!
//! ```ignore
//! use mlbridge_rs::runtime::{ComputeUnits, Model};
//!
//! let model = Model::load("models/test.mlmodel", ComputeUnits::All)?;
//! let response = model.predict("hello")?;
//! println!("{}", response);
//! // The native handle is released when `model` goes out of scope.
//! ```
//!
//! # Building
//!
//! The build script compiles the bundled reference runtime under `mlrt/`
//! with the system C compiler and links it statically. Set `MLRT_SRC` to
//! build against an alternative runtime source tree with the same
//! interface.

pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use bridge::PredictResult;
pub use error::{BridgeError, Result};
pub use runtime::{ComputeUnits, Model};
