// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia/ICU need when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Check the target, not the host, so cross builds link correctly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
