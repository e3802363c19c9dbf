//! Exported C ABI for embedding applications.
//!
//! This is the boundary surface declared in `include/mlbridge.h`: four
//! functions and one result struct. Handles returned by [`load_model`]
//! and results returned by [`predict`] are owned by the caller and must
//! be given back to [`release_model`] / [`free_result`] exactly once.
//! Passing a released or dangling handle anywhere, or freeing a result
//! twice, is a contract violation the bridge does not detect.
//!
//! All text crossing the boundary is null-terminated UTF-8.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use tracing::warn;

use crate::runtime::{ComputeUnits, Model};

/// Outcome of one [`predict`] call, returned by value.
///
/// Exactly one of `response`/`error` is populated and `success` mirrors
/// which. Both strings are allocated by the bridge and released by
/// [`free_result`]. Every call produces a fresh result; results are never
/// pooled or reused.
#[repr(C)]
pub struct PredictResult {
    /// Generated text, null unless `success` is true.
    pub response: *mut c_char,
    /// Diagnostic text, null unless `success` is false.
    pub error: *mut c_char,
    /// Outcome flag.
    pub success: bool,
}

impl PredictResult {
    fn ok(response: String) -> Self {
        Self {
            response: into_c_string(response),
            error: ptr::null_mut(),
            success: true,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            response: ptr::null_mut(),
            error: into_c_string(error.into()),
            success: false,
        }
    }
}

/// Convert an owned string into a caller-owned C string.
///
/// Interior NUL bytes cannot cross the boundary and are stripped.
fn into_c_string(s: String) -> *mut c_char {
    let s = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// Load a model and hand back an owned opaque handle.
///
/// Returns null if the path is null, not valid UTF-8, or rejected by the
/// native runtime. No diagnostic text is available on this channel; the
/// failure reason is emitted on the bridge's log stream only.
///
/// # Safety
///
/// `path` must be null or a valid null-terminated string. The returned
/// handle must be passed to [`release_model`] exactly once and never used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn load_model(path: *const c_char) -> *mut Model {
    if path.is_null() {
        return ptr::null_mut();
    }
    let path = match CStr::from_ptr(path).to_str() {
        Ok(path) => path,
        Err(_) => {
            warn!("load_model: path is not valid UTF-8");
            return ptr::null_mut();
        }
    };
    match Model::load(path, ComputeUnits::default()) {
        Ok(model) => Box::into_raw(Box::new(model)),
        Err(err) => {
            warn!("load_model: {}", err);
            ptr::null_mut()
        }
    }
}

/// Release a handle returned by [`load_model`] and all native resources
/// behind it.
///
/// # Safety
///
/// `handle` must be null or a handle from [`load_model`] that has not
/// been released yet; anything else is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn release_model(handle: *mut Model) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Run one inference against a loaded model.
///
/// A failure (null handle, null input, runtime error) reports through the
/// `error` branch and leaves the handle usable for further calls.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`load_model`]; `input`
/// must be null or a valid null-terminated string. The returned result
/// must be passed to [`free_result`] exactly once.
#[no_mangle]
pub unsafe extern "C" fn predict(handle: *const Model, input: *const c_char) -> PredictResult {
    if handle.is_null() {
        return PredictResult::fail("null model handle");
    }
    if input.is_null() {
        return PredictResult::fail("null input");
    }

    let input = CStr::from_ptr(input).to_string_lossy();
    match (*handle).predict(&input) {
        Ok(response) => PredictResult::ok(response),
        Err(err) => PredictResult::fail(err.to_string()),
    }
}

/// Release the text buffers owned by a result.
///
/// Both pointers are nulled after the free.
///
/// # Safety
///
/// `result` must be null or point to a result produced by [`predict`]
/// whose buffers have not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn free_result(result: *mut PredictResult) {
    if result.is_null() {
        return;
    }
    let result = &mut *result;
    if !result.response.is_null() {
        drop(CString::from_raw(result.response));
        result.response = ptr::null_mut();
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
        result.error = ptr::null_mut();
    }
}
