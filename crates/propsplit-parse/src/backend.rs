//! PDF backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the document operations a
//! split run needs. The orchestrator is generic over it, so tests can drive
//! it with an in-memory fake.

use propsplit_core::{Bookmark, SplitError};

/// Trait abstracting the PDF operations used to split a document.
///
/// # Associated Types
///
/// - `Document`: The parsed PDF document representation.
/// - `Error`: Backend-specific error type, convertible to [`SplitError`].
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// let outline = MyBackend::outline(&doc)?;
/// let bytes = MyBackend::extract_pages(&doc, 2, 16)?;
/// let bytes = MyBackend::embed_outline(&bytes, &section_outline)?;
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`SplitError`].
    type Error: std::error::Error + Into<SplitError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a valid PDF document
    /// or the document is encrypted.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Parse and decrypt PDF bytes.
    ///
    /// The password is ignored for documents that are not encrypted.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF or the password is
    /// incorrect.
    fn open_with_password(bytes: &[u8], password: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Read the full nested outline with 1-based page spans.
    ///
    /// A document without an outline yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline exists but cannot be read.
    fn outline(doc: &Self::Document) -> Result<Vec<Bookmark>, Self::Error>;

    /// Produce a standalone PDF holding only pages `start..=end` (1-based),
    /// renumbered from 1. The source outline is not carried over.
    ///
    /// # Errors
    ///
    /// Returns an error if the range lies outside the document or the result
    /// cannot be serialized.
    fn extract_pages(doc: &Self::Document, start: usize, end: usize)
    -> Result<Vec<u8>, Self::Error>;

    /// Write `outline` as the document outline of `bytes`, replacing any
    /// existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` cannot be parsed or an entry points to a
    /// page the document does not have.
    fn embed_outline(bytes: &[u8], outline: &[Bookmark]) -> Result<Vec<u8>, Self::Error>;
}
