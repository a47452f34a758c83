// File: crates/bench-plot/src/error.rs
// Summary: Loader error taxonomy (missing file, parse failures, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loading benchmark results.
pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has no rows at all, not even the header.
    #[error("{} is empty; expected a header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("line {line}: expected at least 2 fields, found {found}")]
    MissingField { line: u64, found: usize },

    #[error("line {line}, field {field}: cannot parse {value:?} as {expected}")]
    InvalidNumber {
        line: u64,
        field: usize,
        value: String,
        expected: &'static str,
    },

    /// CSV framing problem (e.g. invalid UTF-8) reported by the reader.
    #[error("malformed CSV: {message}")]
    Malformed { line: Option<u64>, message: String },
}

impl LoadError {
    /// True for the parse-class errors (as opposed to file access errors).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. }
                | Self::MissingField { .. }
                | Self::InvalidNumber { .. }
                | Self::Malformed { .. }
        )
    }

    pub(crate) fn from_csv(path: PathBuf, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io { path, source },
            _ => Self::Malformed { line, message },
        }
    }
}
