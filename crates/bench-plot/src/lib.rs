// File: crates/bench-plot/src/lib.rs
// Summary: Library half of the CRDT benchmark plotter: loading samples and presenting the chart.

pub mod error;
pub mod samples;
pub mod loader;
pub mod plot;
pub mod display;

pub use error::LoadError;
pub use samples::{Sample, Samples};
pub use display::{DisplayError, Presented};

use std::path::{Path, PathBuf};

/// Fallback image path for an input file: same location, `.png` extension.
/// A `.png` input becomes `.chart.png` so the image never replaces it.
pub fn default_image_path(input: &Path) -> PathBuf {
    let is_png = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        input.with_extension("chart.png")
    } else {
        input.with_extension("png")
    }
}
