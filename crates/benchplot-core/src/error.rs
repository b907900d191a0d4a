// File: crates/benchplot-core/src/error.rs
// Summary: Error taxonomy shared by the loader and the renderer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Input path missing, unopenable, or unreadable mid-way.
    #[error("resource not found or unreadable: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-blank line broke the `<integer> <real>` record contract.
    #[error("malformed record at {}:{line}: {reason} (line: {content:?})", path.display())]
    MalformedRecord {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        content: String,
        reason: String,
    },

    #[error("cannot render a chart with no series")]
    EmptySeriesSet,

    #[error("failed to write chart to {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported image format for {} (expected .png, .jpg or .jpeg)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("render failed: {0}")]
    Render(String),
}

impl ChartError {
    pub fn malformed(
        path: impl Into<PathBuf>,
        line: usize,
        content: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}
