//! propsplit: Split a bookmarked grant proposal PDF into section files.
//!
//! This is the public API facade crate. It re-exports types from
//! propsplit-core, uses propsplit-parse for PDF reading and writing, and adds
//! the split orchestration and zip packaging on top.
//!
//! # Architecture
//!
//! - **propsplit-core**: Outline model, section table, range filtering
//! - **propsplit-parse**: PDF backend (outline, page extraction, outline writing)
//! - **propsplit** (this crate): [`Splitter`] and [`results_to_zip`]
//!
//! # Example
//!
//! ```ignore
//! use propsplit::{SplitOptions, split_pdf_bytes, results_to_zip};
//!
//! let bytes = std::fs::read("main.pdf")?;
//! let mut warnings = Vec::new();
//! let results = split_pdf_bytes(&bytes, SplitOptions::default(), &mut warnings)?;
//! let archive = results_to_zip("proposal", &results)?;
//! ```

mod archive;
mod splitter;

pub use archive::{results_to_zip, write_zip};
pub use splitter::{Splitter, split_pdf_bytes};

pub use propsplit_core::{
    Bookmark, BookmarkColor, DiscardWarnings, PageRange, Recognizer, SectionKind, SectionPlan,
    SplitError, SplitOptions, SplitResult, SplitWarning, SplitWarningCode, WarningSink, walk,
};
pub use propsplit_parse::{BackendError, LopdfBackend, LopdfDocument, PdfBackend};

pub use propsplit_core;
pub use propsplit_parse;
