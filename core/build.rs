//! Build script for mlbridge-rs.
//!
//! Compiles the bundled mlrt reference runtime and links it statically.
//!
//! # Environment Variables
//!
//! - `MLRT_SRC`: Path to an alternative runtime source tree with the same
//!   layout (`src/mlrt.c`, `include/mlrt.h`). Defaults to the `mlrt/`
//!   directory next to this crate.

use std::env;
use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let runtime_dir = env::var("MLRT_SRC")
        .map(PathBuf::from)
        .unwrap_or_else(|_| manifest_dir.join("../mlrt"));

    let src = runtime_dir.join("src/mlrt.c");
    let include = runtime_dir.join("include");

    if !src.exists() {
        panic!(
            "Runtime source not found: {}\n\
             Set MLRT_SRC to a directory containing src/mlrt.c and include/mlrt.h.",
            src.display()
        );
    }

    println!("cargo:rerun-if-changed={}", src.display());
    println!("cargo:rerun-if-changed={}", include.join("mlrt.h").display());
    println!("cargo:rerun-if-env-changed=MLRT_SRC");

    cc::Build::new().file(&src).include(&include).compile("mlrt");
}
