/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").expect("cargo always sets OUT_DIR");
    let dest_path = Path::new(&out_dir).join("build_env.rs");
    let rust_version = rustc_version::version()
        .map(|version| version.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    fs::write(
        &dest_path,
        format!("const RUST_VERSION: &str = {:?};\n", rust_version),
    )
    .expect("OUT_DIR is writable");
    println!("cargo:rerun-if-changed=build.rs");
}
