//! Proposal sections and the section locator.
//!
//! [`SectionKind`] is the fixed table of sections a proposal is split into,
//! each with a title [`Recognizer`], a default page range and a mandatory
//! flag. [`resolve_range`] maps a recognizer to a page range using the
//! top-level bookmarks; [`plan_sections`] applies it to the whole table.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::{Bookmark, PageRange, SplitError};

/// A case-insensitive title pattern identifying where a section starts.
#[derive(Debug, Clone)]
pub struct Recognizer {
    regex: Regex,
}

impl Recognizer {
    /// Compile `pattern` as a case-insensitive regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::Other`] if the pattern is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self, SplitError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| SplitError::Other(format!("invalid section pattern: {e}")))?;
        Ok(Self { regex })
    }

    /// Whether `title` contains a match.
    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn builtin(pattern: &str) -> Recognizer {
    Recognizer::new(pattern).expect("built-in section pattern is valid")
}

static SUMMARY: LazyLock<Recognizer> = LazyLock::new(|| builtin(r"(project\s+)?summary"));
static PROJECT_DESCRIPTION: LazyLock<Recognizer> =
    LazyLock::new(|| builtin(r"project\s+description"));
static REFERENCES: LazyLock<Recognizer> = LazyLock::new(|| builtin(r"references(\s+cited)?"));
static DATA_MANAGEMENT_PLAN: LazyLock<Recognizer> =
    LazyLock::new(|| builtin(r"data\s+management\s+plans?"));
static MENTORING_PLAN: LazyLock<Recognizer> = LazyLock::new(|| builtin(r"mentoring\s+plans?"));

/// The sections a proposal is split into, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionKind {
    /// Project summary.
    Summary,
    /// Project description.
    ProjectDescription,
    /// References cited.
    References,
    /// Data management plan (optional).
    DataManagementPlan,
    /// Mentoring plan (optional).
    MentoringPlan,
}

impl SectionKind {
    /// Every section, in the order sections are extracted.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::ProjectDescription,
        SectionKind::References,
        SectionKind::DataManagementPlan,
        SectionKind::MentoringPlan,
    ];

    /// Short identifier used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::ProjectDescription => "project-description",
            SectionKind::References => "references",
            SectionKind::DataManagementPlan => "data-mgmt-plan",
            SectionKind::MentoringPlan => "mentoring-plan",
        }
    }

    /// Output file name, e.g. `submit-summary.pdf`.
    pub fn file_name(self) -> String {
        format!("submit-{}.pdf", self.name())
    }

    /// Title recognizer for this section.
    pub fn recognizer(self) -> &'static Recognizer {
        match self {
            SectionKind::Summary => &SUMMARY,
            SectionKind::ProjectDescription => &PROJECT_DESCRIPTION,
            SectionKind::References => &REFERENCES,
            SectionKind::DataManagementPlan => &DATA_MANAGEMENT_PLAN,
            SectionKind::MentoringPlan => &MENTORING_PLAN,
        }
    }

    /// Range used when no bookmark matches.
    pub fn default_range(self) -> Option<PageRange> {
        match self {
            SectionKind::Summary => Some(PageRange::new(1, 1)),
            SectionKind::ProjectDescription => Some(PageRange::new(2, 16)),
            SectionKind::References => Some(PageRange::open(17)),
            SectionKind::DataManagementPlan | SectionKind::MentoringPlan => None,
        }
    }

    /// Mandatory sections are always extracted; optional ones only when a
    /// matching bookmark exists.
    pub fn is_mandatory(self) -> bool {
        matches!(
            self,
            SectionKind::Summary | SectionKind::ProjectDescription | SectionKind::References
        )
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a section's page range from the top-level bookmarks.
///
/// The first bookmark whose title matches wins. The section runs until the
/// page before the next top-level bookmark starts, or to the end of the
/// document if the match is the last bookmark. Nested bookmarks are not
/// scanned. Returns `default` when nothing matches.
pub fn resolve_range(
    recognizer: &Recognizer,
    bookmarks: &[Bookmark],
    default: Option<PageRange>,
) -> Option<PageRange> {
    let Some(i) = bookmarks
        .iter()
        .position(|bm| recognizer.is_match(&bm.title))
    else {
        return default;
    };
    let start = bookmarks[i].page_from;
    Some(match bookmarks.get(i + 1) {
        Some(next) => PageRange::new(start, next.page_from.saturating_sub(1)),
        None => PageRange::open(start),
    })
}

/// Whether any top-level bookmark title matches `recognizer`.
pub fn has_section(recognizer: &Recognizer, bookmarks: &[Bookmark]) -> bool {
    bookmarks.iter().any(|bm| recognizer.is_match(&bm.title))
}

/// How a single section will be handled by a split run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionPlan {
    /// The section.
    pub kind: SectionKind,
    /// Resolved range as located (may still be open-ended).
    pub range: Option<PageRange>,
    /// Last page once an open end is resolved against the page count.
    pub end_page: Option<usize>,
    /// Whether a bookmark matched (as opposed to falling back to the default).
    pub from_bookmark: bool,
    /// Whether the section will be extracted.
    pub included: bool,
}

/// Resolve every section in [`SectionKind::ALL`] without extracting anything.
///
/// Optional sections without a matching bookmark are reported with
/// `included == false`. Mandatory sections are always `included`; a
/// mandatory section with no range will fail at extraction time.
pub fn plan_sections(bookmarks: &[Bookmark], page_count: usize) -> Vec<SectionPlan> {
    SectionKind::ALL
        .iter()
        .map(|&kind| {
            let recognizer = kind.recognizer();
            let from_bookmark = has_section(recognizer, bookmarks);
            let range = resolve_range(recognizer, bookmarks, kind.default_range());
            SectionPlan {
                kind,
                range,
                end_page: range.map(|r| r.resolve(page_count)),
                from_bookmark,
                included: kind.is_mandatory() || from_bookmark,
            }
        })
        .collect()
}
