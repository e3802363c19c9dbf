//! Exercises the exported C ABI the way an embedding application would.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::PathBuf;
use std::ptr;

use mlbridge_rs::bridge::{free_result, load_model, predict, release_model};

fn fixture_cstring() -> CString {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../models/test.mlmodel");
    CString::new(path.to_string_lossy().into_owned()).unwrap()
}

unsafe fn text(ptr: *const c_char) -> String {
    assert!(!ptr.is_null());
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

#[test]
fn load_predict_free_release_scenario() {
    unsafe {
        let path = fixture_cstring();
        let handle = load_model(path.as_ptr());
        assert!(!handle.is_null());

        let input = CString::new("hello").unwrap();
        let mut result = predict(handle, input.as_ptr());
        assert!(result.success);
        assert!(result.error.is_null());
        assert!(!text(result.response).is_empty());

        free_result(&mut result);
        assert!(result.response.is_null());
        assert!(result.error.is_null());

        release_model(handle);
    }
}

#[test]
fn load_nonexistent_path_returns_null() {
    unsafe {
        let path = CString::new("does/not/exist.mlmodel").unwrap();
        assert!(load_model(path.as_ptr()).is_null());
    }
}

#[test]
fn load_null_path_returns_null() {
    unsafe {
        assert!(load_model(ptr::null()).is_null());
    }
}

#[test]
fn predict_on_null_handle_reports_error() {
    unsafe {
        let input = CString::new("hello").unwrap();
        let mut result = predict(ptr::null(), input.as_ptr());
        assert!(!result.success);
        assert!(result.response.is_null());
        assert!(!text(result.error).is_empty());
        free_result(&mut result);
    }
}

#[test]
fn handle_stays_usable_after_failed_predict() {
    unsafe {
        let path = fixture_cstring();
        let handle = load_model(path.as_ptr());
        assert!(!handle.is_null());

        let mut failed = predict(handle, ptr::null());
        assert!(!failed.success);
        assert!(!text(failed.error).is_empty());
        free_result(&mut failed);

        let input = CString::new("still works").unwrap();
        let mut ok = predict(handle, input.as_ptr());
        assert!(ok.success);
        assert!(text(ok.response).contains("still works"));
        free_result(&mut ok);

        release_model(handle);
    }
}

#[test]
fn lifecycle_loop_releases_cleanly() {
    unsafe {
        let path = fixture_cstring();
        let input = CString::new("loop").unwrap();
        for _ in 0..100 {
            let handle = load_model(path.as_ptr());
            assert!(!handle.is_null());

            let mut result = predict(handle, input.as_ptr());
            assert!(result.success);
            free_result(&mut result);

            release_model(handle);
        }
    }
}
