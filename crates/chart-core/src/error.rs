// File: crates/chart-core/src/error.rs
// Summary: Rendering error type shared by the PNG and RGBA output paths.

use thiserror::Error;

/// Result alias for chart rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Surface dimensions are non-positive or leave no plot area after insets.
    #[error("invalid surface size {width}x{height} for the configured insets")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to create raster surface")]
    Surface,

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
