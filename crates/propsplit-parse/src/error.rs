//! Error types for the backend layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps backend-specific errors and converts them to [`SplitError`].

use propsplit_core::SplitError;
use thiserror::Error;

/// Error type for PDF backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading or writing PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error building or serializing an output document.
    #[error("PDF write error: {0}")]
    Write(String),

    /// A requested page range lies outside the document.
    #[error("page range {start}-{end} is outside the document ({page_count} pages)")]
    PageRange {
        /// First requested page (1-based).
        start: usize,
        /// Last requested page (1-based, inclusive).
        end: usize,
        /// Number of pages in the document.
        page_count: usize,
    },

    /// A core library error.
    #[error(transparent)]
    Core(#[from] SplitError),
}

impl From<lopdf::Error> for BackendError {
    fn from(err: lopdf::Error) -> Self {
        BackendError::Parse(err.to_string())
    }
}

impl From<BackendError> for SplitError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => SplitError::ParseError(msg),
            BackendError::Io(e) => SplitError::IoError(e.to_string()),
            BackendError::Write(msg) => SplitError::Other(format!("PDF write error: {msg}")),
            BackendError::PageRange {
                start,
                end,
                page_count,
            } => SplitError::InvalidPageRange {
                start,
                end,
                page_count,
            },
            BackendError::Core(e) => e,
        }
    }
}
