//! propsplit-parse: PDF backend for outline and page-range operations.
//!
//! This crate implements the document-processing layer of propsplit: reading
//! the bookmark outline, counting pages, extracting page ranges as standalone
//! documents and writing a new outline into extracted bytes. It depends on
//! propsplit-core for shared data types.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use propsplit_core;
