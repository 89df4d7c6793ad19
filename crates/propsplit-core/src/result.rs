//! Split output records.

/// One extracted section, ready to be written or packaged.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// Output identifier, e.g. `submit-summary.pdf`.
    pub name: String,
    /// The standalone PDF bytes of the section.
    pub data: Vec<u8>,
    /// First source page of the section (1-based).
    pub start_page: usize,
    /// Last source page of the section (1-based, inclusive).
    pub end_page: usize,
}

impl SplitResult {
    /// Number of pages in the extracted section; zero for an inverted span.
    pub fn page_count(&self) -> usize {
        (self.end_page + 1).saturating_sub(self.start_page)
    }

    /// The source page span as `"start-end"`.
    pub fn page_span(&self) -> String {
        format!("{}-{}", self.start_page, self.end_page)
    }
}
