//! FFI declarations for the native text-model runtime.
//!
//! This module contains the raw FFI bindings. Use the safe wrappers
//! in the `model` module instead of calling these directly.

use std::ffi::c_void;
use std::os::raw::c_char;

/// Opaque handle to a model loaded by the native runtime.
pub type RuntimeModelHandle = *mut c_void;

extern "C" {
    // Model lifecycle
    pub fn mlrt_model_load(path: *const c_char, compute_units: *const c_char)
        -> RuntimeModelHandle;
    pub fn mlrt_model_free(model: RuntimeModelHandle);
    pub fn mlrt_last_error() -> *const c_char;

    // Inference
    pub fn mlrt_model_predict(model: RuntimeModelHandle, input: *const c_char) -> *mut c_char;
    pub fn mlrt_string_free(text: *mut c_char);

    // Diagnostics
    pub fn mlrt_version() -> *const c_char;
}
