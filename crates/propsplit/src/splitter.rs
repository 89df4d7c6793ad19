//! Section extraction over a [`PdfBackend`].
//!
//! [`Splitter`] opens a proposal once, reads its outline once, and then
//! extracts each section as a standalone PDF carrying only the bookmarks that
//! fall inside the section, renumbered so the section starts at page 1.

use std::marker::PhantomData;
use std::path::Path;

use propsplit_core::{
    Bookmark, PageRange, Recognizer, SectionKind, SectionPlan, SplitError, SplitOptions,
    SplitResult, SplitWarning, SplitWarningCode, WarningSink, has_section, plan_sections,
    resolve_range, section_outline,
};
use propsplit_parse::{LopdfBackend, PdfBackend};

/// An opened proposal ready to be split.
///
/// Generic over the PDF backend; [`Splitter::open`] uses [`LopdfBackend`].
///
/// # Example
///
/// ```ignore
/// let splitter = Splitter::open(&bytes, SplitOptions::default())?;
/// let mut warnings: Vec<SplitWarning> = Vec::new();
/// for result in splitter.split(&mut warnings)? {
///     std::fs::write(&result.name, &result.data)?;
/// }
/// ```
pub struct Splitter<B: PdfBackend = LopdfBackend> {
    doc: B::Document,
    bookmarks: Vec<Bookmark>,
    page_count: usize,
    options: SplitOptions,
    backend: PhantomData<B>,
}

impl Splitter<LopdfBackend> {
    /// Open a proposal from PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::ResourceLimitExceeded`] if the input is larger
    /// than `options.max_input_bytes`, or an error if the bytes cannot be
    /// parsed or decrypted.
    pub fn open(bytes: &[u8], options: SplitOptions) -> Result<Self, SplitError> {
        Self::open_with_backend(bytes, options)
    }

    /// Read a proposal from a file and open it.
    pub fn open_file(path: impl AsRef<Path>, options: SplitOptions) -> Result<Self, SplitError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| SplitError::IoError(format!("{}: {e}", path.display())))?;
        Self::open(&bytes, options)
    }
}

impl<B: PdfBackend> Splitter<B> {
    /// Open a proposal from PDF bytes with an explicit backend.
    pub fn open_with_backend(bytes: &[u8], options: SplitOptions) -> Result<Self, SplitError> {
        options.check_input_size(bytes.len())?;
        let doc = match options.password.as_deref() {
            Some(password) => B::open_with_password(bytes, password),
            None => B::open(bytes),
        }
        .map_err(to_split_error)?;
        Self::from_document(doc, options)
    }

    /// Wrap an already opened document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document outline cannot be read.
    pub fn from_document(doc: B::Document, options: SplitOptions) -> Result<Self, SplitError> {
        let bookmarks = B::outline(&doc).map_err(to_split_error)?;
        let page_count = B::page_count(&doc);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            page_count,
            bookmarks = bookmarks.len(),
            "opened proposal"
        );

        Ok(Self {
            doc,
            bookmarks,
            page_count,
            options,
            backend: PhantomData,
        })
    }

    /// The full source outline with page spans.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Number of pages in the source document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The underlying backend document.
    pub fn document(&self) -> &B::Document {
        &self.doc
    }

    /// Options this splitter was opened with.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Resolve every known section without extracting anything.
    pub fn plan(&self) -> Vec<SectionPlan> {
        plan_sections(&self.bookmarks, self.page_count)
    }

    /// Extract every mandatory section, plus each optional section that has a
    /// matching bookmark, in [`SectionKind::ALL`] order.
    ///
    /// # Errors
    ///
    /// The first failing section aborts the run and its error is returned,
    /// wrapped in [`SplitError::Extract`]. Sections already extracted are
    /// discarded.
    pub fn split(&self, warnings: &mut dyn WarningSink) -> Result<Vec<SplitResult>, SplitError> {
        let mut results = Vec::new();
        for kind in SectionKind::ALL {
            if !kind.is_mandatory() && !has_section(kind.recognizer(), &self.bookmarks) {
                #[cfg(feature = "tracing")]
                tracing::debug!(section = kind.name(), "optional section absent, skipping");
                continue;
            }
            results.push(self.extract_section(kind, warnings)?);
        }
        Ok(results)
    }

    /// Extract one of the known proposal sections.
    pub fn extract_section(
        &self,
        kind: SectionKind,
        warnings: &mut dyn WarningSink,
    ) -> Result<SplitResult, SplitError> {
        self.extract(kind.name(), kind.recognizer(), kind.default_range(), warnings)
    }

    /// Locate a section by `recognizer` and extract it.
    ///
    /// Falls back to `default` when no top-level bookmark matches. The output
    /// is named `submit-<name>.pdf`.
    ///
    /// # Errors
    ///
    /// [`SplitError::SectionNotFound`] when nothing matches and there is no
    /// default. Range and backend failures come back wrapped in
    /// [`SplitError::Extract`].
    pub fn extract(
        &self,
        name: &str,
        recognizer: &Recognizer,
        default: Option<PageRange>,
        warnings: &mut dyn WarningSink,
    ) -> Result<SplitResult, SplitError> {
        let range = resolve_range(recognizer, &self.bookmarks, default)
            .ok_or_else(|| SplitError::SectionNotFound(name.to_string()))?;
        let start = range.start;
        let end = range.resolve(self.page_count);

        #[cfg(feature = "tracing")]
        tracing::debug!(section = name, start, end, "extracting section");

        let outline = section_outline(&self.bookmarks, start, end);
        let pages = B::extract_pages(&self.doc, start, end)
            .map_err(|e| to_split_error(e).in_section(name))?;

        let data = if outline.is_empty() {
            pages
        } else {
            match B::embed_outline(&pages, &outline) {
                Ok(with_outline) => with_outline,
                Err(e) => {
                    let warning = SplitWarning::with_code(
                        SplitWarningCode::OutlineEmbedFailed,
                        format!("bookmarks not written: {}", to_split_error(e)),
                    )
                    .for_section(name);
                    if self.options.strict_mode {
                        return Err(warning.to_error().in_section(name));
                    }
                    if self.options.collect_warnings {
                        warnings.warn(warning);
                    }
                    pages
                }
            }
        };

        Ok(SplitResult {
            name: format!("submit-{name}.pdf"),
            data,
            start_page: start,
            end_page: end,
        })
    }
}

impl<B: PdfBackend> std::fmt::Debug for Splitter<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splitter")
            .field("page_count", &self.page_count)
            .field("bookmarks", &self.bookmarks.len())
            .field("options", &self.options)
            .finish()
    }
}

fn to_split_error<E: Into<SplitError>>(err: E) -> SplitError {
    err.into()
}

/// Split PDF bytes into the proposal sections.
///
/// Convenience wrapper around [`Splitter::open`] and [`Splitter::split`].
pub fn split_pdf_bytes(
    bytes: &[u8],
    options: SplitOptions,
    warnings: &mut dyn WarningSink,
) -> Result<Vec<SplitResult>, SplitError> {
    Splitter::open(bytes, options)?.split(warnings)
}
