//! Error and warning types for propsplit.
//!
//! Provides [`SplitError`] for fatal errors that abort a split run,
//! [`SplitWarning`] for non-fatal issues that allow the run to continue,
//! [`WarningSink`] for routing warnings to the caller, and [`SplitOptions`]
//! for configuring resource limits and warning behavior.

use std::fmt;

/// Fatal error types for a split run.
///
/// Any of these aborts the remaining sections. Results produced before the
/// failure are not returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading the source or writing an output.
    IoError(String),
    /// The PDF is encrypted and requires a password to open.
    PasswordRequired,
    /// The supplied password is incorrect for this encrypted PDF.
    InvalidPassword,
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// A section's recognizer matched no bookmark and no default applies.
    SectionNotFound(String),
    /// A resolved page range does not fit the document.
    InvalidPageRange {
        /// First page of the requested range (1-based).
        start: usize,
        /// Last page of the requested range (1-based, inclusive).
        end: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
    /// Extracting a named section failed.
    Extract {
        /// Section name (e.g. "references").
        section: String,
        /// The underlying failure.
        source: Box<SplitError>,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl SplitError {
    /// Wrap this error with the name of the section being extracted.
    pub fn in_section(self, section: impl Into<String>) -> Self {
        SplitError::Extract {
            section: section.into(),
            source: Box::new(self),
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::ParseError(msg) => write!(f, "parse error: {msg}"),
            SplitError::IoError(msg) => write!(f, "I/O error: {msg}"),
            SplitError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            SplitError::InvalidPassword => write!(f, "the supplied password is incorrect"),
            SplitError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            SplitError::SectionNotFound(name) => write!(f, "section {name} not found"),
            SplitError::InvalidPageRange {
                start,
                end,
                page_count,
            } => write!(
                f,
                "invalid page range {start}-{end} for document with {page_count} pages"
            ),
            SplitError::Extract { section, source } => {
                write!(f, "could not extract {section}: {source}")
            }
            SplitError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Extract { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        SplitError::IoError(err.to_string())
    }
}

/// Machine-readable warning code for categorizing split issues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum SplitWarningCode {
    /// The section's outline could not be written into the extracted pages.
    OutlineEmbedFailed,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl SplitWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            SplitWarningCode::OutlineEmbedFailed => "OUTLINE_EMBED_FAILED",
            SplitWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for SplitWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning encountered during a split run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitWarning {
    /// Machine-readable warning code.
    pub code: SplitWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Section the warning belongs to, if any.
    pub section: Option<String>,
}

impl SplitWarning {
    /// Create a warning with just a description.
    ///
    /// Uses [`SplitWarningCode::Other`] as the default code.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: SplitWarningCode::Other(desc.clone()),
            description: desc,
            section: None,
        }
    }

    /// Create a warning with a specific code and description.
    pub fn with_code(code: SplitWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            section: None,
        }
    }

    /// Attach the section name, returning the modified warning.
    pub fn for_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Convert this warning into a [`SplitError`].
    ///
    /// Used by strict mode to escalate warnings to errors.
    pub fn to_error(&self) -> SplitError {
        SplitError::Other(self.to_string())
    }
}

impl fmt::Display for SplitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(ref section) = self.section {
            write!(f, " (section {section})")?;
        }
        Ok(())
    }
}

/// Destination for non-fatal warnings.
///
/// The console front end prints them, the WASM bridge hands them back to
/// JavaScript, and library callers may collect or drop them.
pub trait WarningSink {
    /// Receive one warning.
    fn warn(&mut self, warning: SplitWarning);
}

impl WarningSink for Vec<SplitWarning> {
    fn warn(&mut self, warning: SplitWarning) {
        self.push(warning);
    }
}

impl<F: FnMut(SplitWarning)> WarningSink for F {
    fn warn(&mut self, warning: SplitWarning) {
        self(warning)
    }
}

/// A [`WarningSink`] that drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardWarnings;

impl WarningSink for DiscardWarnings {
    fn warn(&mut self, _warning: SplitWarning) {}
}

/// Options for a split run.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOptions {
    /// Password for encrypted PDFs (default: None).
    pub password: Option<Vec<u8>>,
    /// Maximum input PDF size in bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// When true, any warning is escalated to an error (default: false).
    pub strict_mode: bool,
    /// Whether warnings are forwarded to the sink at all (default: true).
    pub collect_warnings: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            password: None,
            max_input_bytes: None,
            strict_mode: false,
            collect_warnings: true,
        }
    }
}

impl SplitOptions {
    /// Check `len` against [`max_input_bytes`](Self::max_input_bytes).
    pub fn check_input_size(&self, len: usize) -> Result<(), SplitError> {
        match self.max_input_bytes {
            Some(limit) if len > limit => Err(SplitError::ResourceLimitExceeded {
                limit_name: "max_input_bytes".to_string(),
                limit_value: limit,
                actual_value: len,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_not_found_display() {
        let err = SplitError::SectionNotFound("summary".to_string());
        assert_eq!(err.to_string(), "section summary not found");
    }

    #[test]
    fn invalid_page_range_display() {
        let err = SplitError::InvalidPageRange {
            start: 17,
            end: 20,
            page_count: 12,
        };
        assert_eq!(
            err.to_string(),
            "invalid page range 17-20 for document with 12 pages"
        );
    }

    #[test]
    fn in_section_wraps_source() {
        let err = SplitError::ParseError("bad xref".to_string()).in_section("references");
        assert_eq!(
            err.to_string(),
            "could not extract references: parse error: bad xref"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "parse error: bad xref");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.pdf");
        let err: SplitError = io_err.into();
        assert!(matches!(err, SplitError::IoError(_)));
        assert!(err.to_string().contains("missing.pdf"));
    }

    #[test]
    fn resource_limit_display() {
        let err = SplitError::ResourceLimitExceeded {
            limit_name: "max_input_bytes".to_string(),
            limit_value: 1024,
            actual_value: 2048,
        };
        assert_eq!(
            err.to_string(),
            "resource limit exceeded: max_input_bytes (limit: 1024, actual: 2048)"
        );
    }

    #[test]
    fn warning_display_with_section() {
        let w = SplitWarning::with_code(SplitWarningCode::OutlineEmbedFailed, "bad tree")
            .for_section("summary");
        assert_eq!(
            w.to_string(),
            "[OUTLINE_EMBED_FAILED] bad tree (section summary)"
        );
    }

    #[test]
    fn warning_new_uses_other_code() {
        let w = SplitWarning::new("something odd");
        assert_eq!(w.code.as_str(), "OTHER");
        assert!(w.section.is_none());
    }

    #[test]
    fn warning_to_error() {
        let w = SplitWarning::with_code(SplitWarningCode::OutlineEmbedFailed, "bad tree");
        assert_eq!(
            w.to_error(),
            SplitError::Other("[OUTLINE_EMBED_FAILED] bad tree".to_string())
        );
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<SplitWarning> = Vec::new();
        sink.warn(SplitWarning::new("a"));
        sink.warn(SplitWarning::new("b"));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn closure_sink_receives() {
        let mut seen = Vec::new();
        {
            let mut sink = |w: SplitWarning| seen.push(w.description);
            sink.warn(SplitWarning::new("hello"));
        }
        assert_eq!(seen, vec!["hello".to_string()]);
    }

    #[test]
    fn discard_sink_drops() {
        let mut sink = DiscardWarnings;
        sink.warn(SplitWarning::new("ignored"));
    }

    #[test]
    fn default_options() {
        let opts = SplitOptions::default();
        assert!(opts.password.is_none());
        assert!(opts.max_input_bytes.is_none());
        assert!(!opts.strict_mode);
        assert!(opts.collect_warnings);
    }

    #[test]
    fn check_input_size_respects_limit() {
        let opts = SplitOptions {
            max_input_bytes: Some(10),
            ..SplitOptions::default()
        };
        assert!(opts.check_input_size(10).is_ok());
        assert!(matches!(
            opts.check_input_size(11),
            Err(SplitError::ResourceLimitExceeded { .. })
        ));
        assert!(SplitOptions::default().check_input_size(usize::MAX).is_ok());
    }
}
